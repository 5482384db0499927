use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::model::day::{Day, TOTAL_DAYS};

/// The stored progress blob could not be decoded.
#[derive(Debug, Error)]
#[error("malformed progress record: {0}")]
pub struct ProgressParseError(#[from] serde_json::Error);

/// A learner's position in the challenge.
///
/// Serialized as `{ "completedDays": [..], "currentDay": n }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PersistedProgress")]
pub struct Progress {
    completed_days: BTreeSet<Day>,
    current_day: Day,
}

impl Progress {
    #[must_use]
    pub fn new(completed_days: impl IntoIterator<Item = Day>, current_day: Day) -> Self {
        Self {
            completed_days: completed_days.into_iter().collect(),
            current_day,
        }
    }

    #[must_use]
    pub fn current_day(&self) -> Day {
        self.current_day
    }

    #[must_use]
    pub fn completed_days(&self) -> &BTreeSet<Day> {
        &self.completed_days
    }

    #[must_use]
    pub fn is_completed(&self, day: Day) -> bool {
        self.completed_days.contains(&day)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_days.len()
    }

    /// Completion as a whole percentage, rounded half up.
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        let total = usize::from(TOTAL_DAYS);
        let rounded = (self.completed_count() * 200 + total) / (total * 2);
        u8::try_from(rounded).unwrap_or(100)
    }

    /// Exact completed fraction in `0.0..=1.0`.
    #[must_use]
    pub fn completion_ratio(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let completed = self.completed_count() as f64;
        completed / f64::from(TOTAL_DAYS)
    }

    /// Returns `true` if the day was newly added.
    pub fn insert_completed(&mut self, day: Day) -> bool {
        self.completed_days.insert(day)
    }

    pub fn set_current_day(&mut self, day: Day) {
        self.current_day = day;
    }

    /// Encode for the durable slot.
    ///
    /// # Errors
    ///
    /// Returns `ProgressParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, ProgressParseError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a stored blob.
    ///
    /// Missing fields fall back to defaults and out-of-range entries are
    /// dropped; only malformed JSON is rejected.
    ///
    /// # Errors
    ///
    /// Returns `ProgressParseError` for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, ProgressParseError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedProgress {
    #[serde(default)]
    completed_days: Option<Vec<i64>>,
    #[serde(default)]
    current_day: Option<i64>,
}

impl From<PersistedProgress> for Progress {
    fn from(persisted: PersistedProgress) -> Self {
        let completed_days = persisted
            .completed_days
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| Day::new(raw).ok())
            .collect();
        let current_day = persisted
            .current_day
            .and_then(|raw| Day::new(raw).ok())
            .unwrap_or_default();
        Self {
            completed_days,
            current_day,
        }
    }
}
