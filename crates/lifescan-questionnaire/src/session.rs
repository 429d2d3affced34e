//! Per-visit form state: the answer set, which questions are open, and
//! which are locked open because their value is out of range.
//!
//! A question is locked exactly when its latest value fails its rule. A
//! locked question is forced open in the same step that locks it and refuses
//! to collapse until a later edit brings it back in range. Locks never
//! affect other questions.

use std::collections::BTreeSet;

use lifescan_core::models::answers::AnswerSet;
use lifescan_core::models::variant::ModelVariant;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{QuestionnaireError, SubmitError};
use crate::schema::ValidationOutcome;
use crate::{get_questionnaire, Questionnaire};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LockTransition {
    Locked,
    Unlocked,
    Unchanged,
}

/// What happened to a question after an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldUpdate {
    pub outcome: ValidationOutcome,
    pub transition: LockTransition,
    pub locked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    variant: ModelVariant,
    answers: AnswerSet,
    locked: BTreeSet<String>,
    open: BTreeSet<String>,
}

impl QuestionnaireSession {
    pub fn new(variant: ModelVariant) -> Self {
        let mut session = Self {
            variant,
            answers: AnswerSet::new(),
            locked: BTreeSet::new(),
            open: BTreeSet::new(),
        };
        session.reset();
        session
    }

    /// Switch to another model variant. Answers, locks and open state are
    /// discarded, even when the variant is unchanged.
    pub fn switch_variant(&mut self, variant: ModelVariant) {
        self.variant = variant;
        self.reset();
    }

    fn reset(&mut self) {
        self.answers.clear();
        self.locked.clear();
        self.open.clear();
        if let Some(first) = self.questionnaire().questions().first() {
            self.open.insert(first.id.clone());
        }
    }

    fn questionnaire(&self) -> Box<dyn Questionnaire> {
        get_questionnaire(self.variant)
    }

    fn known(&self, question_id: &str) -> Result<(), QuestionnaireError> {
        if self.questionnaire().question(question_id).is_some() {
            Ok(())
        } else {
            Err(QuestionnaireError::UnknownQuestion {
                variant: self.variant,
                question_id: question_id.to_string(),
            })
        }
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Record an answer and re-derive the question's lock from it.
    pub fn answer(
        &mut self,
        question_id: &str,
        value: &str,
    ) -> Result<FieldUpdate, QuestionnaireError> {
        self.known(question_id)?;
        self.answers.insert(question_id, value);

        let outcome = self.questionnaire().validate(question_id, value);
        let was_locked = self.locked.contains(question_id);

        let transition = match (was_locked, outcome.in_range) {
            (false, false) => {
                self.locked.insert(question_id.to_string());
                debug!(variant = %self.variant, question_id, "question locked");
                LockTransition::Locked
            }
            (true, true) => {
                self.locked.remove(question_id);
                debug!(variant = %self.variant, question_id, "question unlocked");
                LockTransition::Unlocked
            }
            _ => LockTransition::Unchanged,
        };

        if !outcome.in_range {
            self.open.insert(question_id.to_string());
        }

        Ok(FieldUpdate {
            locked: !outcome.in_range,
            outcome,
            transition,
        })
    }

    /// Toggle a question open or closed and return whether it is open
    /// afterwards. Locked questions always stay open.
    pub fn toggle(&mut self, question_id: &str) -> Result<bool, QuestionnaireError> {
        self.known(question_id)?;
        if self.locked.contains(question_id) {
            self.open.insert(question_id.to_string());
            return Ok(true);
        }
        if self.open.remove(question_id) {
            Ok(false)
        } else {
            self.open.insert(question_id.to_string());
            Ok(true)
        }
    }

    pub fn is_open(&self, question_id: &str) -> bool {
        self.open.contains(question_id)
    }

    pub fn is_locked(&self, question_id: &str) -> bool {
        self.locked.contains(question_id)
    }

    pub fn locked_questions(&self) -> impl Iterator<Item = &str> {
        self.locked.iter().map(String::as_str)
    }

    pub fn progress(&self) -> Progress {
        let questionnaire = self.questionnaire();
        let questions = questionnaire.questions();
        Progress {
            answered: questions
                .iter()
                .filter(|q| self.answers.is_answered(&q.id))
                .count(),
            total: questions.len(),
        }
    }

    /// Submit gate, re-derived from the answers rather than the lock flags.
    pub fn check_submission(&self) -> Result<(), SubmitError> {
        self.questionnaire().check_submission(&self.answers)
    }
}
