//! Tier thresholds.
//!
//! The fallback score and the service probability are mapped to tiers by two
//! independently defined policies. They are not equivalent and must stay
//! separate.

use lifescan_core::models::risk::RiskTier;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Maps the additive fallback score (roughly 0 to 13) to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreTierPolicy {
    /// Lowest score classified as high risk.
    pub high: u32,
    /// Lowest score classified as medium risk.
    pub medium: u32,
}

impl ScoreTierPolicy {
    pub const FALLBACK: ScoreTierPolicy = ScoreTierPolicy { high: 8, medium: 5 };

    pub fn tier(&self, score: u32) -> RiskTier {
        if score >= self.high {
            RiskTier::High
        } else if score >= self.medium {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }
}

/// Maps the prediction service's probability to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProbabilityTierPolicy {
    pub high: f64,
    pub medium: f64,
}

impl ProbabilityTierPolicy {
    pub const SERVICE: ProbabilityTierPolicy = ProbabilityTierPolicy {
        high: 0.7,
        medium: 0.4,
    };

    pub fn tier(&self, probability: f64) -> RiskTier {
        if probability >= self.high {
            RiskTier::High
        } else if probability >= self.medium {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }
}
