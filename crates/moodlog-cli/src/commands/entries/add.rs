use moodlog_core::{MoodStore, MoodlogError, NewMoodEntry, SaveOutcome};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{parse_date, read_entry_fields};
use crate::output::entry_json;
use crate::ui::{print, receipt};

fn duplicate_error(date: chrono::NaiveDate) -> CliError {
    CliError::duplicate(
        format!("An entry for {} already exists", date),
        "Hint: Drop --no-overwrite to update it, or run `moodlog delete --date` first.",
    )
}

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value, ctx.today()?)?,
        None => ctx.today()?,
    };

    let existing = store.get_by_date(date)?;
    if args.no_overwrite && existing.is_some() {
        return Err(duplicate_error(date).into());
    }

    let interactive = !args.no_input && ctx.ui_context(args.json, None).is_interactive();
    let fields = read_entry_fields(
        args.mood.clone(),
        args.rating,
        args.gratitude.clone(),
        interactive,
        existing.as_ref(),
    )?;
    let new_entry = NewMoodEntry::new(date, fields.mood, fields.gratitude, fields.rating);

    let (entry, outcome) = if args.no_overwrite {
        match store.create(&new_entry) {
            Ok(entry) => (entry, SaveOutcome::Created),
            Err(MoodlogError::DuplicateEntry(date)) => return Err(duplicate_error(date).into()),
            Err(err) => return Err(err.into()),
        }
    } else {
        store.upsert(&new_entry)?
    };
    tracing::debug!(id = entry.id, date = %entry.date, outcome = outcome.as_str(), "saved entry");

    if args.json {
        let mut value = entry_json(&entry);
        value["outcome"] = serde_json::Value::from(outcome.as_str());
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        let title = match outcome {
            SaveOutcome::Created => "Entry saved",
            SaveOutcome::Updated => "Entry updated",
        };
        let id = entry.id.to_string();
        let date = entry.date.format("%Y-%m-%d").to_string();
        let rating = entry.rating.to_string();
        print(
            &ui,
            &receipt(
                &ui,
                title,
                &[
                    ("ID", id.as_str()),
                    ("Date", date.as_str()),
                    ("Mood", entry.mood.as_str()),
                    ("Rating", rating.as_str()),
                    ("Outcome", outcome.as_str()),
                ],
            ),
        );
    }
    Ok(())
}
