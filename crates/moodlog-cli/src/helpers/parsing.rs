//! Parsing helpers for days, months, and ratings.

use chrono::{Datelike, Duration, NaiveDate};

use moodlog_core::storage::{MAX_YEAR, MIN_YEAR};

use crate::constants::{RATING_MAX, RATING_MIN};
use crate::errors::CliError;

/// Parse a day (`YYYY-MM-DD`, `today`, or `yesterday`) relative to `today`.
pub fn parse_date(value: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    if trimmed.eq_ignore_ascii_case("yesterday") {
        return Ok(today - Duration::days(1));
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!(
            "Invalid date: {} (expected YYYY-MM-DD, today, or yesterday)",
            value
        ))
    })?;
    check_year(date.year(), value)?;
    Ok(date)
}

fn check_year(year: i32, value: &str) -> Result<(), CliError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CliError::invalid_input(format!(
            "Date out of range: {} (years {:04} to {} only)",
            value, MIN_YEAR, MAX_YEAR
        )))
    }
}

/// Parse a month (`YYYY-MM`) into its first day.
pub fn parse_month(value: &str) -> anyhow::Result<NaiveDate> {
    let invalid = || CliError::invalid_input(format!("Invalid month: {} (expected YYYY-MM)", value));

    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    check_year(year, value)?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| invalid().into())
}

/// First and last day of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> anyhow::Result<(NaiveDate, NaiveDate)> {
    let first = day
        .with_day(1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month start for {}", day))?;
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .ok_or_else(|| anyhow::anyhow!("Month out of range: {}", first))?;
    Ok((first, next - Duration::days(1)))
}

/// Reject ratings outside the 1-5 scale.
pub fn validate_rating(rating: i32) -> anyhow::Result<i32> {
    if (RATING_MIN..=RATING_MAX).contains(&rating) {
        Ok(rating)
    } else {
        Err(CliError::invalid_input(format!(
            "Rating must be between {} and {} (got {})",
            RATING_MIN, RATING_MAX, rating
        ))
        .into())
    }
}
