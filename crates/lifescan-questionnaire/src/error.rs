use lifescan_core::models::variant::ModelVariant;
use serde::Serialize;
use thiserror::Error;

use crate::schema::UnusualValue;

#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("unknown question '{question_id}' for questionnaire '{variant}'")]
    UnknownQuestion {
        variant: ModelVariant,
        question_id: String,
    },

    #[error("questionnaire '{variant}' is inconsistent: {detail}")]
    InconsistentTable {
        variant: ModelVariant,
        detail: String,
    },
}

/// Why a questionnaire cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmitError {
    #[error("{} value(s) outside the recommended clinical range", .values.len())]
    UnusualValues { values: Vec<UnusualValue> },

    #[error("please answer every question: {} missing", .missing.len())]
    Incomplete { missing: Vec<String> },
}
