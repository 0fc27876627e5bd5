use moodlog_core::MoodStore;

use crate::app::AppContext;
use crate::cli::TodayArgs;
use crate::errors::CliError;
use crate::output::{entry_json, print_entry};

pub fn handle_today(ctx: &AppContext, args: &TodayArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let today = ctx.today()?;

    let entry = store.get_by_date(today)?.ok_or_else(|| {
        CliError::not_found(
            format!("No entry for today ({})", today),
            "Hint: Run `moodlog add` to record how today went.",
        )
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry_json(&entry))?);
    } else {
        print_entry(&ctx.ui_context(false, None), &entry, ctx.quiet());
    }
    Ok(())
}
