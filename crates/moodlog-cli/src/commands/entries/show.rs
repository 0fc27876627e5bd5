use moodlog_core::MoodStore;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::helpers::parse_date;
use crate::output::{entry_json, print_entry};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let date = parse_date(&args.date, ctx.today()?)?;

    let entry = store.get_by_date(date)?.ok_or_else(|| {
        CliError::not_found(
            format!("No entry for {}", date),
            "Hint: Run `moodlog calendar` to see which days have entries.",
        )
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry_json(&entry))?);
    } else {
        print_entry(&ctx.ui_context(false, None), &entry, ctx.quiet());
    }
    Ok(())
}
