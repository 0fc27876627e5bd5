//! Error types for Moodlog core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for Moodlog operations.
pub type Result<T> = std::result::Result<T, MoodlogError>;

/// Core error type for Moodlog operations.
#[derive(Debug, Error)]
pub enum MoodlogError {
    /// An entry already exists for this date
    #[error("An entry for {0} already exists")]
    DuplicateEntry(NaiveDate),

    /// No entry has this id
    #[error("Entry not found: {0}")]
    NotFound(i64),

    /// Date cannot be stored (year outside 0001..=9999)
    #[error("Date {0} is outside the supported range 0001-01-01 to 9999-12-31")]
    InvalidDate(NaiveDate),

    /// Connection could not be obtained, or a query failed
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl MoodlogError {
    /// Whether the caller can recover (offer upsert, report a missing id).
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, MoodlogError::StorageUnavailable(_))
    }
}

impl From<rusqlite::Error> for MoodlogError {
    fn from(err: rusqlite::Error) -> Self {
        MoodlogError::StorageUnavailable(err.to_string())
    }
}

impl From<std::io::Error> for MoodlogError {
    fn from(err: std::io::Error) -> Self {
        MoodlogError::StorageUnavailable(err.to_string())
    }
}
