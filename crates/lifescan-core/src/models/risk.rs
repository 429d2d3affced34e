use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Three-tier risk classification shared by the fallback scorer and the
/// prediction service path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Short label shown on the result badge.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MODERATE",
            RiskTier::High => "HIGH",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low risk - keep healthy habits and regular check-ups",
            RiskTier::Medium => "Intermediate risk - medical consultation and follow-up suggested",
            RiskTier::High => "Elevated risk - priority medical evaluation recommended",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub icon: String,
    pub title: String,
    pub text: String,
}

impl Recommendation {
    pub fn new(icon: &str, title: &str, text: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            text: text.to_string(),
        }
    }
}

/// Where a [`RiskResult`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResultSource {
    /// Local rule-based scoring, used when the prediction service is down.
    Fallback,
    /// Prediction service output merged over the local templates.
    Service,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskResult {
    /// Additive rule score from the fallback model.
    pub score: u32,
    pub tier: RiskTier,
    pub description: String,
    pub narrative: String,
    /// Never empty.
    pub factors: Vec<String>,
    /// At most five entries.
    pub recommendations: Vec<Recommendation>,
    pub source: ResultSource,
}
