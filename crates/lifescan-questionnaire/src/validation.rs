//! Variant-keyed entry points to the validator, for callers that hold a
//! [`ModelVariant`] rather than a questionnaire.

use lifescan_core::models::answers::AnswerSet;
use lifescan_core::models::variant::ModelVariant;

use crate::error::SubmitError;
use crate::get_questionnaire;
use crate::schema::{ValidationOutcome, ValidationReport};

pub fn validate(variant: ModelVariant, question_id: &str, raw: &str) -> ValidationOutcome {
    get_questionnaire(variant).validate(question_id, raw)
}

pub fn validate_all(variant: ModelVariant, answers: &AnswerSet) -> ValidationReport {
    get_questionnaire(variant).validate_all(answers)
}

pub fn check_submission(variant: ModelVariant, answers: &AnswerSet) -> Result<(), SubmitError> {
    get_questionnaire(variant).check_submission(answers)
}
