use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Input hint for a numeric question: the bounds and step the form offers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    /// Pick exactly one of the listed options.
    Choice { options: Vec<ChoiceOption> },
    /// Free numeric entry.
    Numeric {
        range: NumericRange,
        placeholder: Option<String>,
    },
}

/// A single question in a questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub required: bool,
}

impl Question {
    /// Display label for a stored answer: the option label for choice
    /// questions, the raw value otherwise.
    pub fn display_value<'a>(&'a self, raw: &'a str) -> &'a str {
        match &self.kind {
            QuestionKind::Choice { options } => options
                .iter()
                .find(|o| o.value == raw)
                .map(|o| o.label.as_str())
                .unwrap_or(raw),
            QuestionKind::Numeric { .. } => raw,
        }
    }
}

/// Clinical plausibility bounds for one numeric question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationRule {
    pub question_id: String,
    pub min: f64,
    pub max: f64,
    pub message: String,
}

impl ValidationRule {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Result of validating a single field edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationOutcome {
    pub in_range: bool,
    /// Empty when in range.
    pub message: String,
}

impl ValidationOutcome {
    pub fn in_range() -> Self {
        Self {
            in_range: true,
            message: String::new(),
        }
    }

    pub fn out_of_range(message: String) -> Self {
        Self {
            in_range: false,
            message,
        }
    }
}

/// An answer that fell outside its clinical range at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnusualValue {
    pub question_id: String,
    pub value: String,
    pub message: String,
    pub min: f64,
    pub max: f64,
}

/// Whole-form range check, in questionnaire order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub unusual_values: Vec<UnusualValue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.unusual_values.is_empty()
    }
}
