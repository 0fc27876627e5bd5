//! Storage trait definition.
//!
//! `MoodStore` is the only interface the presentation layer sees. Any
//! backend must enforce the one-entry-per-date invariant itself rather
//! than relying on callers to check first.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::types::{IntegrityReport, MoodEntry, NewMoodEntry, SaveOutcome};
use crate::error::Result;

/// Mood entry store interface.
///
/// Implementations must ensure:
/// - At most one entry exists per date
/// - Check-then-write in `create`/`upsert` is atomic against concurrent callers
/// - Every operation holds its storage handle only for its own duration
pub trait MoodStore: Send + Sync {
    /// Insert a new entry with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `MoodlogError::DuplicateEntry` if an entry for `entry.date`
    /// already exists. The existing entry is left untouched.
    fn create(&self, entry: &NewMoodEntry) -> Result<MoodEntry>;

    /// Insert, or update mood/rating/gratitude in place if the date exists.
    ///
    /// On update the id and date are unchanged.
    fn upsert(&self, entry: &NewMoodEntry) -> Result<(MoodEntry, SaveOutcome)>;

    /// Get the entry for a date.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entry))` if found, `Ok(None)` if not found.
    fn get_by_date(&self, date: NaiveDate) -> Result<Option<MoodEntry>>;

    /// Get an entry by id. `Ok(None)` if not found.
    fn get_by_id(&self, id: i64) -> Result<Option<MoodEntry>>;

    /// List every entry exactly once. Order is unspecified.
    fn list_all(&self) -> Result<Vec<MoodEntry>>;

    /// List entries with `start <= date <= end`, ordered by date.
    fn list_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<MoodEntry>>;

    /// Distinct dates that currently have an entry.
    fn all_dates(&self) -> Result<BTreeSet<NaiveDate>>;

    /// Delete the entry for a date.
    ///
    /// Deleting a date with no entry succeeds; the return value reports
    /// whether a row was actually removed.
    fn delete_by_date(&self, date: NaiveDate) -> Result<bool>;

    /// Delete the entry with this id.
    ///
    /// # Errors
    ///
    /// Returns `MoodlogError::NotFound` if no entry has that id.
    fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Verify the underlying database and the one-entry-per-date invariant.
    fn check_integrity(&self) -> Result<IntegrityReport>;
}
