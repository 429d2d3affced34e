//! lifescan-risk
//!
//! Rule-based fallback risk model, used when the prediction service cannot
//! be reached. Every function here is pure: the same answers always give
//! the same [`RiskResult`].

pub mod merge;
pub mod models;
pub mod policy;

use lifescan_core::models::answers::AnswerSet;
use lifescan_core::models::risk::{Recommendation, ResultSource, RiskResult, RiskTier};
use lifescan_core::models::variant::ModelVariant;
use tracing::debug;

use policy::ScoreTierPolicy;

pub const NO_SIGNIFICANT_FACTORS: &str = "No significant risk factors identified";

const GENERIC_INSIGHT: &str =
    "Regular follow-up and preventive measures suited to the identified profile are recommended.";

const MAX_RECOMMENDATIONS: usize = 5;

/// Rule table for one model variant.
pub trait RiskModel: Send + Sync {
    fn variant(&self) -> ModelVariant;

    /// Additive point score. Every rule contributes independently.
    fn points(&self, answers: &AnswerSet) -> u32;

    /// Triggered risk factors, in rule order. May be empty.
    fn factors(&self, answers: &AnswerSet) -> Vec<&'static str>;

    /// Fixed narrative paragraph for a tier.
    fn paragraph(&self, tier: RiskTier) -> &'static str;

    /// Personalized sentence for the first matching compound condition.
    fn insight(&self, answers: &AnswerSet) -> Option<&'static str>;

    /// Condition-triggered recommendations, in rule order.
    fn targeted_recommendations(&self, answers: &AnswerSet) -> Vec<Recommendation>;
}

pub fn get_risk_model(variant: ModelVariant) -> Box<dyn RiskModel> {
    match variant {
        ModelVariant::Stroke => Box::new(models::stroke::StrokeRisk),
        ModelVariant::Heart => Box::new(models::heart::HeartRisk),
    }
}

pub fn score_points(variant: ModelVariant, answers: &AnswerSet) -> u32 {
    get_risk_model(variant).points(answers)
}

/// Risk factors for the answers. Never empty: when nothing triggers, a
/// single "no significant factors" entry is returned.
pub fn risk_factors(variant: ModelVariant, answers: &AnswerSet) -> Vec<String> {
    let factors = get_risk_model(variant).factors(answers);
    if factors.is_empty() {
        vec![NO_SIGNIFICANT_FACTORS.to_string()]
    } else {
        factors.into_iter().map(str::to_string).collect()
    }
}

pub fn generate_narrative(variant: ModelVariant, tier: RiskTier, answers: &AnswerSet) -> String {
    let model = get_risk_model(variant);
    let insight = model.insight(answers).unwrap_or(GENERIC_INSIGHT);
    format!("{} {}", model.paragraph(tier), insight)
}

/// Ranked recommendations: two universal entries, the variant's targeted
/// ones, then stress management, cut to five from the tail.
pub fn generate_recommendations(variant: ModelVariant, answers: &AnswerSet) -> Vec<Recommendation> {
    let mut recommendations = vec![
        Recommendation::new(
            "🏥",
            "Medical consultation",
            "Schedule a visit with a specialist for a complete evaluation",
        ),
        Recommendation::new(
            "📊",
            "Regular monitoring",
            "Have periodic check-ups according to your risk profile",
        ),
    ];
    recommendations.extend(get_risk_model(variant).targeted_recommendations(answers));
    recommendations.push(Recommendation::new(
        "😴",
        "Stress management",
        "Practise relaxation techniques and keep a restful sleep routine",
    ));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Score a complete answer set with the fallback rules.
pub fn score(variant: ModelVariant, answers: &AnswerSet) -> RiskResult {
    let points = score_points(variant, answers);
    let tier = ScoreTierPolicy::FALLBACK.tier(points);
    debug!(%variant, score = points, ?tier, "fallback risk scored");
    RiskResult {
        score: points,
        tier,
        description: tier.description().to_string(),
        narrative: generate_narrative(variant, tier, answers),
        factors: risk_factors(variant, answers),
        recommendations: generate_recommendations(variant, answers),
        source: ResultSource::Fallback,
    }
}
