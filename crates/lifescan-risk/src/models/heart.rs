use lifescan_core::models::answers::AnswerSet;
use lifescan_core::models::risk::{Recommendation, RiskTier};
use lifescan_core::models::variant::ModelVariant;

use super::{bracket, flag};
use crate::RiskModel;

/// Heart fallback rules.
///
/// Diagnosed heart disease +3, age +2/+1 at 60/50, chest pain ASY +2 or
/// ATA +1, exercise angina +2, Oldpeak +2/+1 at 2/1.
pub struct HeartRisk;

fn exercise_angina(answers: &AnswerSet) -> bool {
    answers.is("ExerciseAngina", "Y")
}

impl RiskModel for HeartRisk {
    fn variant(&self) -> ModelVariant {
        ModelVariant::Heart
    }

    fn points(&self, answers: &AnswerSet) -> u32 {
        let chest_pain = match answers.get("ChestPainType") {
            Some("ASY") => 2,
            Some("ATA") => 1,
            _ => 0,
        };
        flag(answers.is("HeartDisease", "1"), 3)
            + bracket(answers.whole_or_zero("Age") as f64, &[(60.0, 2), (50.0, 1)])
            + chest_pain
            + flag(exercise_angina(answers), 2)
            + bracket(answers.number_or_zero("Oldpeak"), &[(2.0, 2), (1.0, 1)])
    }

    fn factors(&self, answers: &AnswerSet) -> Vec<&'static str> {
        let checks = [
            (answers.is("HeartDisease", "1"), "Diagnosed heart disease"),
            (exercise_angina(answers), "Exercise-induced angina"),
            (answers.is("ST_Slope", "Down"), "Downsloping ST segment"),
            (answers.is("ChestPainType", "ASY"), "Asymptomatic chest pain"),
            (answers.number_or_zero("Oldpeak") >= 2.0, "Significant ST depression"),
            (answers.whole_or_zero("Age") >= 60, "Age as a risk factor"),
        ];
        checks
            .into_iter()
            .filter_map(|(hit, factor)| hit.then_some(factor))
            .collect()
    }

    fn paragraph(&self, tier: RiskTier) -> &'static str {
        match tier {
            RiskTier::Low => {
                "The analysis compares your cardiac parameters with normal values established in \
                 large health studies. In your case the results are within the usual ranges, so \
                 there are no signs of elevated risk at this time."
            }
            RiskTier::Medium => {
                "The analysis combines several indicators of your heart and detects values that \
                 deviate from healthy ones. When these factors appear together they increase the \
                 chance of a cardiac problem. Your results show patterns that deserve medical \
                 attention to rule out risks and act in time."
            }
            RiskTier::High => {
                "The model examines how your data relate to each other, not only each value on its \
                 own. Trained on thousands of real cases, it identifies configurations that may \
                 indicate risk before obvious symptoms appear. In this evaluation the system \
                 detects relevant patterns worth reviewing with a professional."
            }
        }
    }

    fn insight(&self, answers: &AnswerSet) -> Option<&'static str> {
        if exercise_angina(answers) && answers.is("ST_Slope", "Down") {
            return Some(
                "Exercise-induced angina together with a downsloping ST segment are findings that \
                 merit a specialised cardiology evaluation.",
            );
        }
        if answers.number_or_zero("Cholesterol") > 240.0 && answers.is("FastingBS", "1") {
            return Some(
                "High cholesterol and fasting glucose point to a metabolic profile that benefits \
                 from comprehensive management.",
            );
        }
        None
    }

    fn targeted_recommendations(&self, answers: &AnswerSet) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();
        if exercise_angina(answers) {
            recommendations.push(Recommendation::new(
                "🏃",
                "Supervised exercise",
                "Do physical activity under specialised medical supervision",
            ));
        }
        if answers.number_or_zero("Cholesterol") > 200.0 {
            recommendations.push(Recommendation::new(
                "🥑",
                "Heart-healthy diet",
                "Adopt a diet low in saturated fat and rich in fibre",
            ));
        }
        if answers.is("FastingBS", "1") {
            recommendations.push(Recommendation::new(
                "📈",
                "Glycaemic control",
                "Monitor your glucose levels and follow nutritional advice",
            ));
        }
        recommendations
    }
}
