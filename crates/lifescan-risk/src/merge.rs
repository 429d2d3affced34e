//! Combine a prediction service response with the locally computed result.

use lifescan_core::models::prediction::PredictionResponse;
use lifescan_core::models::risk::{ResultSource, RiskResult};

use crate::policy::ProbabilityTierPolicy;

/// Shown in place of factors when the service returns none.
pub const SERVICE_FACTORS_FALLBACK: &str =
    "Analysis based on predictive model with clinical adjustment";

/// Merge an optional service response over the fallback result.
///
/// With a successful response the tier comes from the probability policy and
/// the service analysis and factors take precedence; score and
/// recommendations are always local. Without one the fallback is returned
/// unchanged.
pub fn merge(external: Option<&PredictionResponse>, fallback: RiskResult) -> RiskResult {
    let Some(external) = external.filter(|e| e.success) else {
        return fallback;
    };

    let tier = ProbabilityTierPolicy::SERVICE.tier(external.probability);

    let mut sections = Vec::new();
    if let Some(analysis) = external.analysis.as_deref().filter(|a| !a.trim().is_empty()) {
        sections.push(analysis.trim().to_string());
    }
    sections.push(fallback.narrative);
    sections.push(metrics_paragraph(external));

    let factors = if external.factors.is_empty() {
        vec![SERVICE_FACTORS_FALLBACK.to_string()]
    } else {
        external.factors.clone()
    };

    RiskResult {
        score: fallback.score,
        tier,
        description: tier.description().to_string(),
        narrative: sections.join("\n\n"),
        factors,
        recommendations: fallback.recommendations,
        source: ResultSource::Service,
    }
}

fn metrics_paragraph(external: &PredictionResponse) -> String {
    let mut paragraph = format!(
        "Model metrics: analysis generated by a machine learning model trained on clinical data. \
         Calculated probability: {:.1}%.",
        external.probability * 100.0
    );
    if let Some(debug) = &external.debug_info {
        paragraph.push_str(if debug.was_adjusted {
            " Clinical adjustment: applied."
        } else {
            " Clinical adjustment: not required."
        });
        if let Some(multiplier) = debug.risk_multiplier {
            paragraph.push_str(&format!(" Risk multiplier: {multiplier:.1}x."));
        }
    }
    paragraph
}
