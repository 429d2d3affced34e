use lifescan_core::models::answers::AnswerSet;
use lifescan_core::models::risk::{Recommendation, RiskTier};
use lifescan_core::models::variant::ModelVariant;

use super::{bracket, flag};
use crate::RiskModel;

/// Stroke fallback rules.
///
/// Age +3/+2/+1 at 65/55/45, hypertension +2, heart disease +2, current
/// smoker +2, BMI +2/+1 at 30/25, average glucose +2/+1 at 140/100.
pub struct StrokeRisk;

fn smokes(answers: &AnswerSet) -> bool {
    answers.is("smoking_status", "smokes")
}

impl RiskModel for StrokeRisk {
    fn variant(&self) -> ModelVariant {
        ModelVariant::Stroke
    }

    fn points(&self, answers: &AnswerSet) -> u32 {
        let age = answers.whole_or_zero("age") as f64;
        bracket(age, &[(65.0, 3), (55.0, 2), (45.0, 1)])
            + flag(answers.is("hypertension", "1"), 2)
            + flag(answers.is("heart_disease", "1"), 2)
            + flag(smokes(answers), 2)
            + bracket(answers.number_or_zero("bmi"), &[(30.0, 2), (25.0, 1)])
            + bracket(
                answers.number_or_zero("avg_glucose_level"),
                &[(140.0, 2), (100.0, 1)],
            )
    }

    fn factors(&self, answers: &AnswerSet) -> Vec<&'static str> {
        let checks = [
            (answers.is("hypertension", "1"), "Arterial hypertension"),
            (answers.is("heart_disease", "1"), "Previous heart disease"),
            (smokes(answers), "Current smoking"),
            (answers.number_or_zero("bmi") >= 30.0, "Obesity (BMI >= 30)"),
            (answers.number_or_zero("avg_glucose_level") >= 126.0, "Elevated glucose"),
            (answers.whole_or_zero("age") >= 65, "Advanced age"),
        ];
        checks
            .into_iter()
            .filter_map(|(hit, factor)| hit.then_some(factor))
            .collect()
    }

    fn paragraph(&self, tier: RiskTier) -> &'static str {
        match tier {
            RiskTier::Low => {
                "Based on the factors analysed, your profile stays within what is expected for \
                 good cardiovascular health. The indicators reviewed show no worrying signs and \
                 the overall pattern is stable. Keeping healthy habits helps maintain these \
                 results over time."
            }
            RiskTier::Medium => {
                "The data analysed show some factors that can raise your risk of stroke if they \
                 are not controlled in time. Many of them are modifiable, so small adjustments to \
                 your habits or medical follow-up can help reduce this risk and keep good \
                 neurological health."
            }
            RiskTier::High => {
                "The evaluation identifies several values that match the high-risk profiles \
                 documented in stroke studies. The patterns found suggest an elevated likelihood \
                 of complications if no action is taken soon. Seeking a medical assessment is \
                 advisable to get guidance and reduce the risk as soon as possible."
            }
        }
    }

    fn insight(&self, answers: &AnswerSet) -> Option<&'static str> {
        if answers.is("hypertension", "1") && answers.is("heart_disease", "1") {
            return Some(
                "The combination of hypertension and previous heart disease is a significant risk \
                 factor that requires regular monitoring.",
            );
        }
        if smokes(answers) && answers.number_or_zero("bmi") > 30.0 {
            return Some(
                "Smoking combined with a high BMI suggests the need for lifestyle interventions.",
            );
        }
        None
    }

    fn targeted_recommendations(&self, answers: &AnswerSet) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();
        if answers.is("hypertension", "1") {
            recommendations.push(Recommendation::new(
                "💊",
                "Hypertension control",
                "Follow the prescribed treatment and monitor your blood pressure regularly",
            ));
        }
        if smokes(answers) {
            recommendations.push(Recommendation::new(
                "🚭",
                "Smoking cessation",
                "Consider a programme to quit smoking and avoid exposure to smoke",
            ));
        }
        if answers.number_or_zero("bmi") >= 25.0 {
            recommendations.push(Recommendation::new(
                "🥗",
                "Weight management",
                "Follow a balanced eating plan and regular physical activity",
            ));
        }
        recommendations
    }
}
