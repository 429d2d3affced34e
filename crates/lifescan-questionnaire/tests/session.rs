use lifescan_core::models::variant::ModelVariant;
use lifescan_questionnaire::error::QuestionnaireError;
use lifescan_questionnaire::session::{LockTransition, QuestionnaireSession};

#[test]
fn first_question_starts_open() {
    let session = QuestionnaireSession::new(ModelVariant::Heart);
    assert!(session.is_open("Age"));
    assert!(!session.is_open("Sex"));
}

#[test]
fn out_of_range_bmi_locks_then_unlocks() {
    let mut session = QuestionnaireSession::new(ModelVariant::Stroke);

    let update = session.answer("bmi", "55").unwrap();
    assert!(!update.outcome.in_range);
    assert_eq!(update.transition, LockTransition::Locked);
    assert!(session.is_locked("bmi"));
    assert!(session.is_open("bmi"), "locking forces the question open");

    let update = session.answer("bmi", "24.5").unwrap();
    assert!(update.outcome.in_range);
    assert_eq!(update.transition, LockTransition::Unlocked);
    assert!(!session.is_locked("bmi"));
}

#[test]
fn repeated_out_of_range_edit_keeps_lock_without_new_transition() {
    let mut session = QuestionnaireSession::new(ModelVariant::Stroke);
    session.answer("age", "0").unwrap();
    let update = session.answer("age", "0").unwrap();
    assert_eq!(update.transition, LockTransition::Unchanged);
    assert!(update.locked);
    assert!(session.is_locked("age"));
}

#[test]
fn locked_question_cannot_be_collapsed() {
    let mut session = QuestionnaireSession::new(ModelVariant::Stroke);
    session.answer("avg_glucose_level", "400").unwrap();

    assert!(session.toggle("avg_glucose_level").unwrap());
    assert!(session.is_open("avg_glucose_level"));

    session.answer("avg_glucose_level", "120").unwrap();
    assert!(!session.toggle("avg_glucose_level").unwrap());
    assert!(!session.is_open("avg_glucose_level"));
}

#[test]
fn locks_are_independent_per_question() {
    let mut session = QuestionnaireSession::new(ModelVariant::Heart);
    session.answer("RestingBP", "250").unwrap();
    session.answer("MaxHR", "150").unwrap();

    assert!(session.is_locked("RestingBP"));
    assert!(!session.is_locked("MaxHR"));
    assert!(session.toggle("MaxHR").unwrap());
    assert!(!session.toggle("MaxHR").unwrap());
    assert_eq!(session.locked_questions().collect::<Vec<_>>(), ["RestingBP"]);
}

#[test]
fn clearing_a_field_releases_its_lock() {
    let mut session = QuestionnaireSession::new(ModelVariant::Stroke);
    session.answer("bmi", "5").unwrap();
    let update = session.answer("bmi", "").unwrap();
    assert_eq!(update.transition, LockTransition::Unlocked);
}

#[test]
fn switching_variant_clears_everything() {
    let mut session = QuestionnaireSession::new(ModelVariant::Stroke);
    session.answer("bmi", "55").unwrap();
    session.answer("gender", "Male").unwrap();

    session.switch_variant(ModelVariant::Heart);
    assert!(session.answers().is_empty());
    assert_eq!(session.locked_questions().count(), 0);
    assert!(session.is_open("Age"));
    assert_eq!(session.variant(), ModelVariant::Heart);
}

#[test]
fn unknown_questions_are_rejected() {
    let mut session = QuestionnaireSession::new(ModelVariant::Heart);
    let err = session.answer("bmi", "22").unwrap_err();
    assert!(matches!(err, QuestionnaireError::UnknownQuestion { .. }));
    assert!(session.toggle("bmi").is_err());
}

#[test]
fn progress_counts_non_empty_answers() {
    let mut session = QuestionnaireSession::new(ModelVariant::Stroke);
    session.answer("gender", "Male").unwrap();
    session.answer("age", "").unwrap();
    let progress = session.progress();
    assert_eq!(progress.answered, 1);
    assert_eq!(progress.total, 10);
}

#[test]
fn submission_rederives_range_errors_from_answers() {
    let mut session = QuestionnaireSession::new(ModelVariant::Stroke);
    session.answer("bmi", "55").unwrap();
    assert!(session.check_submission().is_err());
}
