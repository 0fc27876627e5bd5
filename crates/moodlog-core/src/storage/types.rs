//! Core data types for the storage layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted mood entry. At most one exists per date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Surrogate key assigned by the store; never changes
    pub id: i64,

    /// Calendar day this entry belongs to (the natural key)
    pub date: NaiveDate,

    /// Short mood label, stored as free text
    pub mood: String,

    /// Day rating, 1-5 by convention (not enforced here)
    pub rating: i32,

    /// Gratitude note, may be empty
    pub gratitude: String,
}

/// Input for creating or upserting an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMoodEntry {
    pub date: NaiveDate,
    pub mood: String,
    pub gratitude: String,
    pub rating: i32,
}

impl NewMoodEntry {
    pub fn new(
        date: NaiveDate,
        mood: impl Into<String>,
        gratitude: impl Into<String>,
        rating: i32,
    ) -> Self {
        Self {
            date,
            mood: mood.into(),
            gratitude: gratitude.into(),
            rating,
        }
    }
}

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    Created,
    Updated,
}

impl SaveOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaveOutcome::Created => "created",
            SaveOutcome::Updated => "updated",
        }
    }
}

/// Summary returned by a successful integrity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub entries: usize,
    pub distinct_dates: usize,
}
