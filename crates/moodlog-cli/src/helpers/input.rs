//! Interactive prompts for entry fields.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use moodlog_core::MoodEntry;

use crate::constants::{MOOD_SUGGESTIONS, RATING_MAX, RATING_MIN};
use crate::errors::CliError;

use super::parsing::validate_rating;

const OTHER_MOOD: &str = "Other...";

/// Mood, rating, and gratitude collected from flags and prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFields {
    pub mood: String,
    pub rating: i32,
    pub gratitude: String,
}

/// Resolve entry fields from flags, prompting for anything missing.
///
/// Without a terminal, missing fields fall back to `existing` (the day's
/// current entry); mood and rating are required when there is none.
pub fn read_entry_fields(
    mood: Option<String>,
    rating: Option<i32>,
    gratitude: Option<String>,
    interactive: bool,
    existing: Option<&MoodEntry>,
) -> anyhow::Result<EntryFields> {
    let mood = match mood {
        Some(value) => value,
        None if interactive => prompt_mood(existing.map(|e| e.mood.as_str()))?,
        None => existing.map(|e| e.mood.clone()).ok_or_else(|| {
            CliError::invalid_input("--mood is required when prompts are disabled")
        })?,
    };
    let mood = mood.trim().to_string();
    if mood.is_empty() {
        return Err(CliError::invalid_input("Mood cannot be empty").into());
    }

    let rating = match rating {
        Some(value) => value,
        None if interactive => prompt_rating(existing.map(|e| e.rating))?,
        None => existing.map(|e| e.rating).ok_or_else(|| {
            CliError::invalid_input("--rating is required when prompts are disabled")
        })?,
    };
    let rating = validate_rating(rating)?;

    let gratitude = match gratitude {
        Some(value) => value,
        None if interactive => prompt_gratitude(existing.map(|e| e.gratitude.as_str()))?,
        None => existing.map(|e| e.gratitude.clone()).unwrap_or_default(),
    };

    Ok(EntryFields {
        mood,
        rating,
        gratitude,
    })
}

fn prompt_mood(current: Option<&str>) -> anyhow::Result<String> {
    let theme = ColorfulTheme::default();
    let mut options: Vec<&str> = MOOD_SUGGESTIONS.to_vec();
    if let Some(value) = current {
        if !options.contains(&value) {
            options.push(value);
        }
    }
    options.push(OTHER_MOOD);

    let default = current
        .and_then(|value| options.iter().position(|o| *o == value))
        .unwrap_or(0);
    let choice = Select::with_theme(&theme)
        .with_prompt("How are you feeling?")
        .items(&options)
        .default(default)
        .interact()?;

    if options[choice] == OTHER_MOOD {
        let custom: String = Input::with_theme(&theme)
            .with_prompt("Mood")
            .interact_text()?;
        Ok(custom)
    } else {
        Ok(options[choice].to_string())
    }
}

fn prompt_rating(current: Option<i32>) -> anyhow::Result<i32> {
    let theme = ColorfulTheme::default();
    let ratings: Vec<i32> = (RATING_MIN..=RATING_MAX).collect();
    let labels: Vec<String> = ratings.iter().map(|r| r.to_string()).collect();
    let default = current
        .and_then(|value| ratings.iter().position(|r| *r == value))
        .unwrap_or(ratings.len() / 2);

    let choice = Select::with_theme(&theme)
        .with_prompt("Rate your day")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(ratings[choice])
}

fn prompt_gratitude(current: Option<&str>) -> anyhow::Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt("What are you grateful for?")
        .allow_empty(true);
    if let Some(value) = current.filter(|v| !v.is_empty()) {
        input = input.with_initial_text(value);
    }
    Ok(input.interact_text()?)
}
