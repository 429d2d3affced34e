use lifescan_core::models::answers::AnswerSet;
use lifescan_core::models::risk::RiskResult;
use lifescan_core::models::variant::ModelVariant;
use lifescan_questionnaire::error::SubmitError;
use lifescan_questionnaire::validation::check_submission;
use lifescan_risk::merge::merge;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;

use crate::client::PredictionService;

pub const DEMO_NOTICE: &str =
    "Showing a demonstration analysis: the prediction service is not available.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub result: RiskResult,
    /// Set when the result comes from local fallback scoring.
    pub notice: Option<String>,
}

/// Gate, predict, and merge. Range and completeness problems are returned as
/// errors; service failures degrade to the local fallback result.
pub fn assess(
    service: &dyn PredictionService,
    variant: ModelVariant,
    answers: &AnswerSet,
) -> Result<Assessment, SubmitError> {
    check_submission(variant, answers)?;

    let fallback = lifescan_risk::score(variant, answers);
    match service.predict(variant, answers) {
        Ok(response) => {
            info!(%variant, probability = response.probability, "prediction service answered");
            Ok(Assessment {
                result: merge(Some(&response), fallback),
                notice: None,
            })
        }
        Err(e) => {
            warn!(%variant, error = %e, "prediction service unavailable, using fallback scoring");
            Ok(Assessment {
                result: fallback,
                notice: Some(DEMO_NOTICE.to_string()),
            })
        }
    }
}
