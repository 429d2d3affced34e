pub mod heart;
pub mod stroke;

use crate::schema::{ChoiceOption, NumericRange, Question, QuestionKind, ValidationRule};

const YES_NO: &[(&str, &str)] = &[("1", "Yes"), ("0", "No")];

fn choice(id: &str, prompt: &str, options: &[(&str, &str)]) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        kind: QuestionKind::Choice {
            options: options
                .iter()
                .map(|(value, label)| ChoiceOption {
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        },
        required: true,
    }
}

fn numeric(id: &str, prompt: &str, range: NumericRange, placeholder: &str) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        kind: QuestionKind::Numeric {
            range,
            placeholder: Some(placeholder.to_string()),
        },
        required: true,
    }
}

fn rule(question_id: &str, range: NumericRange, message: &str) -> ValidationRule {
    ValidationRule {
        question_id: question_id.to_string(),
        min: range.min,
        max: range.max,
        message: message.to_string(),
    }
}

fn range(min: f64, max: f64, step: Option<f64>) -> NumericRange {
    NumericRange { min, max, step }
}
