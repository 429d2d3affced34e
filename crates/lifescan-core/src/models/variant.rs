use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The clinical domain a questionnaire and its scoring rules belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ModelVariant {
    Stroke,
    Heart,
}

impl ModelVariant {
    pub const ALL: [ModelVariant; 2] = [ModelVariant::Stroke, ModelVariant::Heart];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVariant::Stroke => "stroke",
            ModelVariant::Heart => "heart",
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelVariant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stroke" => Ok(ModelVariant::Stroke),
            "heart" => Ok(ModelVariant::Heart),
            other => Err(CoreError::UnknownVariant(other.to_string())),
        }
    }
}
