use std::sync::LazyLock;

use lifescan_core::models::variant::ModelVariant;

use super::{choice, numeric, range, rule, YES_NO};
use crate::schema::{NumericRange, Question, ValidationRule};
use crate::Questionnaire;

/// Stroke risk questionnaire. Ten questions matching the stroke model's
/// input features.
pub struct StrokeQuestionnaire;

const AGE: NumericRange = NumericRange {
    min: 1.0,
    max: 120.0,
    step: None,
};

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        choice("gender", "Gender", &[("Male", "Male"), ("Female", "Female")]),
        numeric("age", "Age", AGE, "Enter your age"),
        choice("ever_married", "Have you ever been married?", &[("Yes", "Yes"), ("No", "No")]),
        choice(
            "work_type",
            "Type of work",
            &[
                ("Private", "Private"),
                ("Self-employed", "Self-employed"),
                ("Govt_job", "Government job"),
                ("Children", "Child / student"),
                ("Never_worked", "Never worked"),
            ],
        ),
        choice("Residence_type", "Type of residence", &[("Urban", "Urban"), ("Rural", "Rural")]),
        numeric(
            "avg_glucose_level",
            "Average blood glucose level (mg/dL)",
            range(50.0, 300.0, Some(0.1)),
            "e.g. 100.5",
        ),
        numeric("bmi", "Body mass index (BMI)", range(10.0, 50.0, Some(0.1)), "e.g. 24.5"),
        choice("hypertension", "Do you have hypertension?", YES_NO),
        choice("heart_disease", "Do you have heart disease?", YES_NO),
        choice(
            "smoking_status",
            "Smoking status",
            &[
                ("formerly smoked", "Formerly smoked"),
                ("never smoked", "Never smoked"),
                ("smokes", "Currently smokes"),
                ("Unknown", "Unknown"),
            ],
        ),
    ]
});

static RULES: LazyLock<Vec<ValidationRule>> = LazyLock::new(|| {
    vec![
        rule("age", AGE, "Age is implausible for clinical analysis"),
        rule(
            "avg_glucose_level",
            range(50.0, 300.0, None),
            "Glucose level outside the typical clinical range",
        ),
        rule("bmi", range(10.0, 50.0, None), "BMI outside the standard physiological range"),
    ]
});

impl Questionnaire for StrokeQuestionnaire {
    fn variant(&self) -> ModelVariant {
        ModelVariant::Stroke
    }

    fn name(&self) -> &str {
        "Stroke risk"
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }

    fn rules(&self) -> &[ValidationRule] {
        &RULES
    }
}
