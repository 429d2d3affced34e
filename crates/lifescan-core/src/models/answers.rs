use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw questionnaire answers keyed by question id.
///
/// Values are kept exactly as the user typed or selected them. Numeric
/// interpretation happens at the point of use through [`AnswerSet::number`],
/// so an unparseable entry never poisons the rest of the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the answer for `question_id`.
    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(question_id.into(), value.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    /// True when the question has a non-empty answer.
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.get(question_id).is_some_and(|v| !v.trim().is_empty())
    }

    /// Exact comparison against a choice value.
    pub fn is(&self, question_id: &str, expected: &str) -> bool {
        self.get(question_id) == Some(expected)
    }

    /// Parse the answer as a finite number. Empty, absent, or non-numeric
    /// answers yield `None`.
    pub fn number(&self, question_id: &str) -> Option<f64> {
        parse_finite(self.get(question_id)?)
    }

    /// Numeric answer with missing or unparseable values read as zero.
    pub fn number_or_zero(&self, question_id: &str) -> f64 {
        self.number(question_id).unwrap_or(0.0)
    }

    /// Whole-number reading used for ages: the fractional part is dropped.
    pub fn whole_or_zero(&self, question_id: &str) -> i64 {
        self.number_or_zero(question_id).trunc() as i64
    }

    pub fn answered_count(&self) -> usize {
        self.0.values().filter(|v| !v.trim().is_empty()).count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Parse a raw field value as a finite `f64`, ignoring surrounding
/// whitespace. `NaN` and infinities are rejected.
pub fn parse_finite(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
