//! Row type for `moodentries` queries.

use chrono::{Datelike, NaiveDate};

use crate::error::{MoodlogError, Result};
use crate::storage::types::MoodEntry;

/// Columns selected by every entry query, in `MoodRow` order.
pub const ENTRY_COLUMNS: &str = "id, mood, rating, gratitude, entryDate";

/// Storage format for `entryDate`. Lexical order equals date order only
/// for four-digit years, so keys are limited to `MIN_YEAR..=MAX_YEAR`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

pub fn date_key(date: NaiveDate) -> Result<String> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(MoodlogError::InvalidDate(date));
    }
    Ok(date.format(DATE_FORMAT).to_string())
}

pub fn parse_date_key(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        MoodlogError::StorageUnavailable(format!("Invalid entry date '{}': {}", value, e))
    })
}

/// Raw row data from the moodentries table, before parsing into domain types.
#[derive(Debug)]
pub struct MoodRow {
    pub id: i64,
    pub mood: String,
    pub rating: i32,
    pub gratitude: Option<String>,
    pub entry_date: String,
}

impl MoodRow {
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            mood: row.get(1)?,
            rating: row.get(2)?,
            gratitude: row.get(3)?,
            entry_date: row.get(4)?,
        })
    }
}

impl TryFrom<MoodRow> for MoodEntry {
    type Error = MoodlogError;

    fn try_from(row: MoodRow) -> Result<Self> {
        let date = parse_date_key(&row.entry_date)?;
        Ok(MoodEntry {
            id: row.id,
            date,
            mood: row.mood,
            rating: row.rating,
            gratitude: row.gratitude.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(date_key(date).unwrap(), "2024-01-05");
        assert_eq!(parse_date_key("2024-01-05").unwrap(), date);
    }

    #[test]
    fn test_date_key_rejects_years_that_break_ordering() {
        let far = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        assert!(matches!(date_key(far), Err(MoodlogError::InvalidDate(d)) if d == far));

        let before = NaiveDate::from_ymd_opt(0, 12, 31).unwrap();
        assert!(matches!(date_key(before), Err(MoodlogError::InvalidDate(_))));

        let edges = [
            NaiveDate::from_ymd_opt(1, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(9999, 12, 31).unwrap(),
        ];
        assert_eq!(date_key(edges[0]).unwrap(), "0001-01-01");
        assert_eq!(date_key(edges[1]).unwrap(), "9999-12-31");
    }

    #[test]
    fn test_null_gratitude_reads_as_empty() {
        let row = MoodRow {
            id: 1,
            mood: "Neutral".to_string(),
            rating: 3,
            gratitude: None,
            entry_date: "2024-02-29".to_string(),
        };
        let entry: MoodEntry = row.try_into().unwrap();
        assert_eq!(entry.gratitude, "");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_bad_date_is_storage_error() {
        let row = MoodRow {
            id: 1,
            mood: "Sad".to_string(),
            rating: 1,
            gratitude: Some(String::new()),
            entry_date: "yesterday".to_string(),
        };
        let result: Result<MoodEntry> = row.try_into();
        assert!(matches!(result, Err(MoodlogError::StorageUnavailable(_))));
    }
}
