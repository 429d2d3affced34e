use std::sync::LazyLock;

use lifescan_core::models::variant::ModelVariant;

use super::{choice, numeric, range, rule, YES_NO};
use crate::schema::{Question, ValidationRule};
use crate::Questionnaire;

/// Heart failure questionnaire. Twelve questions; the last one records a
/// prior heart disease diagnosis, which the fallback model weighs most.
pub struct HeartQuestionnaire;

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        numeric("Age", "Age", range(1.0, 120.0, None), "Enter your age"),
        choice("Sex", "Sex", &[("M", "Male"), ("F", "Female")]),
        choice(
            "ChestPainType",
            "Chest pain type",
            &[
                ("TA", "Typical angina"),
                ("ATA", "Atypical angina"),
                ("NAP", "Non-anginal pain"),
                ("ASY", "Asymptomatic"),
            ],
        ),
        numeric(
            "RestingBP",
            "Resting blood pressure (mm Hg)",
            range(80.0, 200.0, None),
            "e.g. 120",
        ),
        numeric("Cholesterol", "Cholesterol level (mg/dL)", range(100.0, 400.0, None), "e.g. 200"),
        choice(
            "FastingBS",
            "Fasting blood sugar",
            &[("0", "< 120 mg/dL"), ("1", ">= 120 mg/dL")],
        ),
        choice(
            "RestingECG",
            "Resting ECG result",
            &[
                ("Normal", "Normal"),
                ("ST", "ST-T wave abnormality"),
                ("LVH", "Left ventricular hypertrophy"),
            ],
        ),
        numeric("MaxHR", "Maximum heart rate achieved", range(60.0, 220.0, None), "e.g. 150"),
        choice(
            "ExerciseAngina",
            "Do you have exercise-induced angina?",
            &[("Y", "Yes"), ("N", "No")],
        ),
        numeric(
            "Oldpeak",
            "Exercise-induced ST depression (Oldpeak)",
            range(0.0, 10.0, Some(0.1)),
            "e.g. 1.5",
        ),
        choice(
            "ST_Slope",
            "Slope of the peak exercise ST segment",
            &[("Up", "Upsloping"), ("Flat", "Flat"), ("Down", "Downsloping")],
        ),
        choice("HeartDisease", "Previous heart disease diagnosis?", YES_NO),
    ]
});

static RULES: LazyLock<Vec<ValidationRule>> = LazyLock::new(|| {
    vec![
        rule("Age", range(1.0, 120.0, None), "Age is implausible for a cardiac evaluation"),
        rule(
            "RestingBP",
            range(80.0, 200.0, None),
            "Resting blood pressure outside the viable range",
        ),
        rule(
            "Cholesterol",
            range(100.0, 400.0, None),
            "Cholesterol level outside clinical parameters",
        ),
        rule(
            "MaxHR",
            range(60.0, 220.0, None),
            "Maximum heart rate outside the physiological range",
        ),
        rule("Oldpeak", range(0.0, 10.0, None), "Oldpeak value is extremely unusual"),
    ]
});

impl Questionnaire for HeartQuestionnaire {
    fn variant(&self) -> ModelVariant {
        ModelVariant::Heart
    }

    fn name(&self) -> &str {
        "Heart failure risk"
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }

    fn rules(&self) -> &[ValidationRule] {
        &RULES
    }
}
