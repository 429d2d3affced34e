//! lifescan-questionnaire
//!
//! Questionnaire definitions for the stroke and heart models, the
//! clinical-range validator, and the per-visit form session that tracks
//! answers and question locks. Pure data and state, no I/O.

pub mod error;
pub mod questionnaires;
pub mod schema;
pub mod session;
pub mod validation;

use std::collections::HashSet;

use lifescan_core::models::answers::{parse_finite, AnswerSet};
use lifescan_core::models::variant::ModelVariant;

use error::{QuestionnaireError, SubmitError};
use schema::{
    Question, QuestionKind, UnusualValue, ValidationOutcome, ValidationReport, ValidationRule,
};

/// Trait implemented by each model variant's questionnaire.
pub trait Questionnaire: Send + Sync {
    fn variant(&self) -> ModelVariant;

    /// Human-readable title (e.g., "Stroke risk").
    fn name(&self) -> &str;

    /// Questions in presentation order. The first one starts open.
    fn questions(&self) -> &[Question];

    /// Clinical-range rules. Not every numeric question has one.
    fn rules(&self) -> &[ValidationRule];

    fn question(&self, id: &str) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }

    /// 1-based position of a question, as shown in "Question n of N".
    fn position(&self, id: &str) -> Option<usize> {
        self.questions().iter().position(|q| q.id == id).map(|i| i + 1)
    }

    fn rule(&self, question_id: &str) -> Option<&ValidationRule> {
        self.rules().iter().find(|r| r.question_id == question_id)
    }

    /// Validate one raw field value. Fields without a rule, empty values and
    /// non-numeric values are always in range.
    fn validate(&self, question_id: &str, raw: &str) -> ValidationOutcome {
        let Some(rule) = self.rule(question_id) else {
            return ValidationOutcome::in_range();
        };
        let Some(value) = parse_finite(raw) else {
            return ValidationOutcome::in_range();
        };
        if rule.contains(value) {
            ValidationOutcome::in_range()
        } else {
            let message = format!("{}. Entered value: {}", rule.message, raw.trim());
            ValidationOutcome::out_of_range(message)
        }
    }

    /// Re-validate every ranged answer from scratch, in questionnaire order.
    fn validate_all(&self, answers: &AnswerSet) -> ValidationReport {
        let mut unusual_values = Vec::new();
        for question in self.questions() {
            let Some(rule) = self.rule(&question.id) else {
                continue;
            };
            let Some(raw) = answers.get(&question.id) else {
                continue;
            };
            let Some(value) = parse_finite(raw) else {
                continue;
            };
            if !rule.contains(value) {
                unusual_values.push(UnusualValue {
                    question_id: question.id.clone(),
                    value: raw.to_string(),
                    message: rule.message.clone(),
                    min: rule.min,
                    max: rule.max,
                });
            }
        }
        ValidationReport { unusual_values }
    }

    /// Required questions with no answer or an empty one.
    fn missing_answers(&self, answers: &AnswerSet) -> Vec<String> {
        self.questions()
            .iter()
            .filter(|q| q.required && !answers.is_answered(&q.id))
            .map(|q| q.id.clone())
            .collect()
    }

    /// Submit gate. Range problems are reported before missing answers.
    fn check_submission(&self, answers: &AnswerSet) -> Result<(), SubmitError> {
        let report = self.validate_all(answers);
        if !report.is_clean() {
            return Err(SubmitError::UnusualValues {
                values: report.unusual_values,
            });
        }
        let missing = self.missing_answers(answers);
        if !missing.is_empty() {
            return Err(SubmitError::Incomplete { missing });
        }
        Ok(())
    }

    /// Check that question ids are unique and that every rule targets a
    /// numeric question whose input bounds match the rule.
    fn verify(&self) -> Result<(), QuestionnaireError> {
        let inconsistent = |detail: String| QuestionnaireError::InconsistentTable {
            variant: self.variant(),
            detail,
        };

        let mut seen = HashSet::new();
        for question in self.questions() {
            if !seen.insert(question.id.as_str()) {
                return Err(inconsistent(format!("duplicate question '{}'", question.id)));
            }
        }

        let mut ruled = HashSet::new();
        for rule in self.rules() {
            if !ruled.insert(rule.question_id.as_str()) {
                return Err(inconsistent(format!("duplicate rule for '{}'", rule.question_id)));
            }
            if rule.min > rule.max {
                return Err(inconsistent(format!("rule for '{}' has min > max", rule.question_id)));
            }
            let question = self.question(&rule.question_id).ok_or_else(|| {
                inconsistent(format!("rule for unknown question '{}'", rule.question_id))
            })?;
            match &question.kind {
                QuestionKind::Numeric { range, .. } => {
                    if range.min != rule.min || range.max != rule.max {
                        return Err(inconsistent(format!(
                            "input bounds of '{}' differ from its rule",
                            rule.question_id
                        )));
                    }
                }
                QuestionKind::Choice { .. } => {
                    return Err(inconsistent(format!(
                        "rule targets choice question '{}'",
                        rule.question_id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Format answers as structured text for the chat service prompt.
    fn to_structured_input(&self, answers: &AnswerSet) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for question in self.questions() {
            if let Some(raw) = answers.get(&question.id).filter(|v| !v.trim().is_empty()) {
                let label = question.display_value(raw);
                output.push_str(&format!("- {}: {}\n", question.prompt, label));
            }
        }
        output
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    ModelVariant::ALL.into_iter().map(get_questionnaire).collect()
}

/// Look up the questionnaire for a model variant.
pub fn get_questionnaire(variant: ModelVariant) -> Box<dyn Questionnaire> {
    match variant {
        ModelVariant::Stroke => Box::new(questionnaires::stroke::StrokeQuestionnaire),
        ModelVariant::Heart => Box::new(questionnaires::heart::HeartQuestionnaire),
    }
}

/// Verify every registered questionnaire table.
pub fn verify_all() -> Result<(), QuestionnaireError> {
    all_questionnaires().iter().try_for_each(|q| q.verify())
}
