//! JSON output formatting for entries.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use moodlog_core::MoodEntry;

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &MoodEntry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "date": entry.date.format("%Y-%m-%d").to_string(),
        "mood": entry.mood,
        "rating": entry.rating,
        "gratitude": entry.gratitude,
    })
}

/// Convert multiple entries to JSON array for output.
pub fn entries_json(entries: &[MoodEntry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

/// Days with entries in the month starting at `first`.
pub fn calendar_json(first: NaiveDate, days: &BTreeSet<NaiveDate>) -> serde_json::Value {
    let days: Vec<String> = days
        .iter()
        .map(|day| day.format("%Y-%m-%d").to_string())
        .collect();
    serde_json::json!({
        "month": first.format("%Y-%m").to_string(),
        "days": days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_json_shape() {
        let entry = MoodEntry {
            id: 3,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            mood: "Happy".to_string(),
            rating: 5,
            gratitude: String::new(),
        };
        let value = entry_json(&entry);
        assert_eq!(value["id"], 3);
        assert_eq!(value["date"], "2024-03-01");
        assert_eq!(value["mood"], "Happy");
        assert_eq!(value["rating"], 5);
        assert_eq!(value["gratitude"], "");
    }

    #[test]
    fn test_calendar_json() {
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let days: BTreeSet<NaiveDate> = [
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        ]
        .into_iter()
        .collect();
        let value = calendar_json(first, &days);
        assert_eq!(value["month"], "2024-03");
        assert_eq!(value["days"], serde_json::json!(["2024-03-02", "2024-03-09"]));
    }
}
