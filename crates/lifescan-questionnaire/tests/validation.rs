use lifescan_core::models::answers::AnswerSet;
use lifescan_core::models::variant::ModelVariant;
use lifescan_questionnaire::error::SubmitError;
use lifescan_questionnaire::validation::{check_submission, validate, validate_all};
use lifescan_questionnaire::{all_questionnaires, get_questionnaire, verify_all};

fn complete_stroke() -> AnswerSet {
    [
        ("gender", "Female"),
        ("age", "70"),
        ("ever_married", "Yes"),
        ("work_type", "Private"),
        ("Residence_type", "Urban"),
        ("avg_glucose_level", "90"),
        ("bmi", "22"),
        ("hypertension", "1"),
        ("heart_disease", "1"),
        ("smoking_status", "never smoked"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn registered_tables_are_consistent() {
    verify_all().unwrap();
    assert_eq!(all_questionnaires().len(), 2);
    assert_eq!(get_questionnaire(ModelVariant::Stroke).questions().len(), 10);
    assert_eq!(get_questionnaire(ModelVariant::Heart).questions().len(), 12);
}

#[test]
fn positions_follow_presentation_order() {
    let heart = get_questionnaire(ModelVariant::Heart);
    assert_eq!(heart.position("Age"), Some(1));
    assert_eq!(heart.position("HeartDisease"), Some(12));
    assert_eq!(heart.position("age"), None);
}

#[test]
fn unranged_fields_are_always_in_range() {
    for value in ["", "abc", "-5", "99999", "1"] {
        assert!(validate(ModelVariant::Stroke, "hypertension", value).in_range);
        assert!(validate(ModelVariant::Heart, "ChestPainType", value).in_range);
        assert!(validate(ModelVariant::Heart, "not_a_question", value).in_range);
    }
}

#[test]
fn rule_lookup_is_per_variant() {
    // `age` is ranged for stroke only; the heart questionnaire uses `Age`.
    assert!(!validate(ModelVariant::Stroke, "age", "150").in_range);
    assert!(validate(ModelVariant::Heart, "age", "150").in_range);
    assert!(!validate(ModelVariant::Heart, "Age", "150").in_range);
}

#[test]
fn empty_and_non_numeric_values_are_in_range() {
    let outcome = validate(ModelVariant::Stroke, "bmi", "");
    assert!(outcome.in_range);
    assert!(outcome.message.is_empty());
    assert!(validate(ModelVariant::Stroke, "bmi", "heavy").in_range);
    assert!(validate(ModelVariant::Stroke, "bmi", "NaN").in_range);
}

#[test]
fn bounds_are_inclusive() {
    assert!(validate(ModelVariant::Stroke, "bmi", "10").in_range);
    assert!(validate(ModelVariant::Stroke, "bmi", "50").in_range);
    assert!(!validate(ModelVariant::Stroke, "bmi", "9.99").in_range);
    assert!(!validate(ModelVariant::Stroke, "bmi", "50.01").in_range);
    assert!(validate(ModelVariant::Heart, "Oldpeak", "0").in_range);
    assert!(!validate(ModelVariant::Heart, "Oldpeak", "-0.1").in_range);
}

#[test]
fn out_of_range_message_echoes_value() {
    let outcome = validate(ModelVariant::Stroke, "bmi", "55");
    assert!(!outcome.in_range);
    assert_eq!(
        outcome.message,
        "BMI outside the standard physiological range. Entered value: 55"
    );
}

#[test]
fn validation_is_idempotent() {
    let first = validate(ModelVariant::Heart, "MaxHR", "250");
    let second = validate(ModelVariant::Heart, "MaxHR", "250");
    assert_eq!(first, second);
}

#[test]
fn validate_all_lists_unusual_values_in_question_order() {
    let mut answers = complete_stroke();
    answers.insert("bmi", "55");
    answers.insert("age", "130");

    let report = validate_all(ModelVariant::Stroke, &answers);
    let ids: Vec<_> = report
        .unusual_values
        .iter()
        .map(|u| u.question_id.as_str())
        .collect();
    assert_eq!(ids, ["age", "bmi"]);

    let bmi = &report.unusual_values[1];
    assert_eq!(bmi.value, "55");
    assert_eq!(bmi.min, 10.0);
    assert_eq!(bmi.max, 50.0);
}

#[test]
fn range_errors_are_reported_before_missing_answers() {
    let answers: AnswerSet = [("bmi", "55")].into_iter().collect();
    match check_submission(ModelVariant::Stroke, &answers) {
        Err(SubmitError::UnusualValues { values }) => assert_eq!(values.len(), 1),
        other => panic!("expected unusual values, got {other:?}"),
    }
}

#[test]
fn missing_and_empty_answers_block_submission() {
    let mut answers = complete_stroke();
    answers.insert("gender", "");
    answers.insert("bmi", "");

    match check_submission(ModelVariant::Stroke, &answers) {
        Err(SubmitError::Incomplete { missing }) => assert_eq!(missing, ["gender", "bmi"]),
        other => panic!("expected incomplete form, got {other:?}"),
    }
}

#[test]
fn complete_in_range_form_is_submittable() {
    check_submission(ModelVariant::Stroke, &complete_stroke()).unwrap();
}

#[test]
fn structured_input_uses_choice_labels() {
    let text = get_questionnaire(ModelVariant::Stroke).to_structured_input(&complete_stroke());
    assert!(text.starts_with("## Stroke risk\n"));
    assert!(text.contains("- Do you have hypertension?: Yes\n"));
    assert!(text.contains("- Age: 70\n"));
}
