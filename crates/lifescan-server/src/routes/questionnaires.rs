use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use lifescan_core::models::answers::AnswerSet;
use lifescan_core::models::risk::RiskResult;
use lifescan_core::models::variant::ModelVariant;
use lifescan_predict::assess::{assess, Assessment};
use lifescan_questionnaire::schema::{
    Question, ValidationOutcome, ValidationReport, ValidationRule,
};
use lifescan_questionnaire::{all_questionnaires, get_questionnaire};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuestionnaireSummary {
    variant: ModelVariant,
    name: String,
    question_count: usize,
}

#[derive(Serialize)]
pub struct NumberedQuestion {
    number: usize,
    #[serde(flatten)]
    question: Question,
}

#[derive(Serialize)]
pub struct QuestionnaireDetail {
    variant: ModelVariant,
    name: String,
    total: usize,
    questions: Vec<NumberedQuestion>,
    rules: Vec<ValidationRule>,
}

#[derive(Deserialize)]
pub struct FieldEdit {
    question_id: String,
    #[serde(default)]
    value: String,
}

#[derive(Serialize)]
pub struct FormCheck {
    #[serde(flatten)]
    report: ValidationReport,
    missing: Vec<String>,
    submittable: bool,
}

pub async fn list_questionnaires() -> Json<Vec<QuestionnaireSummary>> {
    let questionnaires = all_questionnaires()
        .iter()
        .map(|q| QuestionnaireSummary {
            variant: q.variant(),
            name: q.name().to_string(),
            question_count: q.questions().len(),
        })
        .collect();
    Json(questionnaires)
}

pub async fn get_questionnaire_detail(
    Path(variant): Path<ModelVariant>,
) -> Json<QuestionnaireDetail> {
    let questionnaire = get_questionnaire(variant);
    let questions: Vec<NumberedQuestion> = questionnaire
        .questions()
        .iter()
        .filter_map(|question| {
            let number = questionnaire.position(&question.id)?;
            Some(NumberedQuestion {
                number,
                question: question.clone(),
            })
        })
        .collect();

    Json(QuestionnaireDetail {
        variant,
        name: questionnaire.name().to_string(),
        total: questions.len(),
        questions,
        rules: questionnaire.rules().to_vec(),
    })
}

/// Validate a single field edit. Unknown question ids are rejected.
pub async fn validate_field(
    Path(variant): Path<ModelVariant>,
    Json(edit): Json<FieldEdit>,
) -> Result<Json<ValidationOutcome>, ApiError> {
    let questionnaire = get_questionnaire(variant);
    if questionnaire.question(&edit.question_id).is_none() {
        return Err(ApiError::BadRequest(format!(
            "unknown question '{}' for questionnaire '{variant}'",
            edit.question_id
        )));
    }
    Ok(Json(questionnaire.validate(&edit.question_id, &edit.value)))
}

/// Whole-form check without submitting: range report plus missing answers.
pub async fn check_form(
    Path(variant): Path<ModelVariant>,
    Json(answers): Json<AnswerSet>,
) -> Json<FormCheck> {
    let questionnaire = get_questionnaire(variant);
    let report = questionnaire.validate_all(&answers);
    let missing = questionnaire.missing_answers(&answers);
    Json(FormCheck {
        submittable: report.is_clean() && missing.is_empty(),
        report,
        missing,
    })
}

/// Local fallback scoring only, behind the same submit gate.
pub async fn score_answers(
    Path(variant): Path<ModelVariant>,
    Json(answers): Json<AnswerSet>,
) -> Result<Json<RiskResult>, ApiError> {
    get_questionnaire(variant).check_submission(&answers)?;
    Ok(Json(lifescan_risk::score(variant, &answers)))
}

/// Full submit: gate, prediction service, fallback on failure.
pub async fn assess_answers(
    State(state): State<AppState>,
    Path(variant): Path<ModelVariant>,
    Json(answers): Json<AnswerSet>,
) -> Result<Json<Assessment>, ApiError> {
    let client = state.client.clone();
    let assessment =
        tokio::task::spawn_blocking(move || assess(&client, variant, &answers)).await??;
    Ok(Json(assessment))
}
