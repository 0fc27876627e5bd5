//! Text and table output formatting for entries.

use moodlog_core::MoodEntry;

use crate::constants::RATING_MAX;
use crate::ui::format::{one_line, rating_bar, truncate};
use crate::ui::{blank_line, header, kv, print, simple_table, Column, UiContext};

use super::json::entries_json;

const TABLE_GRATITUDE_MAX: usize = 48;

fn rating_label(ctx: &UiContext, rating: i32) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", rating_bar(rating, RATING_MAX, ctx.unicode), rating)
    } else {
        rating.to_string()
    }
}

/// Print a single entry.
pub fn print_entry(ctx: &UiContext, entry: &MoodEntry, quiet: bool) {
    if !quiet {
        let date = entry.date.format("%A, %B %-d %Y").to_string();
        print(ctx, &header(ctx, "entry", Some(&date)));
        blank_line(ctx);
    }
    let lines = [
        kv(ctx, "ID", &entry.id.to_string()),
        kv(ctx, "Date", &entry.date.format("%Y-%m-%d").to_string()),
        kv(ctx, "Mood", &entry.mood),
        kv(ctx, "Rating", &rating_label(ctx, entry.rating)),
        kv(ctx, "Gratitude", &entry.gratitude),
    ];
    for line in lines {
        print(ctx, &line);
    }
}

/// Table rows for entries, oldest day first.
fn entry_rows(ctx: &UiContext, entries: &[MoodEntry]) -> Vec<Vec<String>> {
    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.date);
    sorted
        .into_iter()
        .map(|entry| {
            let gratitude = one_line(&entry.gratitude);
            let gratitude = if ctx.mode.is_pretty() {
                truncate(&gratitude, TABLE_GRATITUDE_MAX)
            } else {
                gratitude
            };
            vec![
                entry.id.to_string(),
                entry.date.format("%Y-%m-%d").to_string(),
                entry.mood.clone(),
                rating_label(ctx, entry.rating),
                gratitude,
            ]
        })
        .collect()
}

/// Print a list of entries as JSON or a table.
pub fn print_entry_list(ctx: &UiContext, entries: &[MoodEntry], quiet: bool) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        let mut sorted = entries.to_vec();
        sorted.sort_by_key(|entry| entry.date);
        let output = serde_json::to_string_pretty(&entries_json(&sorted))?;
        println!("{}", output);
        return Ok(());
    }

    if entries.is_empty() {
        if !quiet {
            print(ctx, "No mood entries found.");
        }
        return Ok(());
    }

    let columns = [
        Column::new("ID"),
        Column::new("Date"),
        Column::new("Mood"),
        Column::new("Rating"),
        Column::new("Gratitude"),
    ];
    print(ctx, &simple_table(ctx, &columns, &entry_rows(ctx, entries)));
    Ok(())
}
