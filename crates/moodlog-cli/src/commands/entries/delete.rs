use chrono::NaiveDate;
use dialoguer::Confirm;

use moodlog_core::{MoodStore, MoodlogError};

use crate::app::{AppContext, Store};
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::parse_date;
use crate::ui::{badge, print, Badge, OutputMode, UiContext};

fn confirm(prompt: String) -> anyhow::Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

fn cancelled_message(ui: &UiContext) -> String {
    match ui.mode {
        OutputMode::Pretty => badge(ui, Badge::Info, "Cancelled"),
        OutputMode::Plain | OutputMode::Json => "status=cancelled".to_string(),
    }
}

fn report_cancelled(ctx: &AppContext) {
    tracing::debug!("delete cancelled at prompt");
    if !ctx.quiet() {
        println!("{}", cancelled_message(&ctx.ui_context(false, None)));
    }
}

fn delete_by_date(ctx: &AppContext, store: &Store, date: NaiveDate, ask: bool) -> anyhow::Result<()> {
    if ask {
        if let Some(entry) = store.get_by_date(date)? {
            if !confirm(format!("Delete the {} entry for {}?", entry.mood, date))? {
                report_cancelled(ctx);
                return Ok(());
            }
        }
    }

    let removed = store.delete_by_date(date)?;
    tracing::debug!(date = %date, removed, "delete by date");
    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        let message = if removed {
            badge(&ui, Badge::Ok, &format!("Deleted entry for {}", date))
        } else {
            badge(&ui, Badge::Info, &format!("No entry for {}; nothing to delete", date))
        };
        print(&ui, &message);
    }
    Ok(())
}

fn delete_by_id(ctx: &AppContext, store: &Store, id: i64, ask: bool) -> anyhow::Result<()> {
    if ask {
        let label = match store.get_by_id(id)? {
            Some(entry) => format!("Delete entry {} ({}, {})?", id, entry.date, entry.mood),
            None => format!("Delete entry {}?", id),
        };
        if !confirm(label)? {
            report_cancelled(ctx);
            return Ok(());
        }
    }

    match store.delete_by_id(id) {
        Ok(()) => {}
        Err(MoodlogError::NotFound(id)) => {
            return Err(CliError::not_found(
                format!("Entry not found: {}", id),
                "Hint: Run `moodlog list` to find entry IDs.",
            )
            .into());
        }
        Err(err) => return Err(err.into()),
    }
    tracing::debug!(id, "delete by id");

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(&ui, &badge(&ui, Badge::Ok, &format!("Deleted entry {}", id)));
    }
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ask = !args.force && ctx.ui_context(false, None).is_interactive();

    match (args.date.as_deref(), args.id) {
        (Some(value), None) => {
            let date = parse_date(value, ctx.today()?)?;
            delete_by_date(ctx, &store, date, ask)
        }
        (None, Some(id)) => delete_by_id(ctx, &store, id, ask),
        _ => Err(CliError::invalid_input("Pass exactly one of --date or --id").into()),
    }
}
