use chrono::NaiveDate;

use moodlog_core::storage::{MAX_YEAR, MIN_YEAR};
use moodlog_core::MoodStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::parse_date;
use crate::output::print_entry_list;
use crate::ui::OutputMode;

fn earliest_day() -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1).ok_or_else(|| anyhow::anyhow!("Invalid lower bound"))
}

fn latest_day() -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31).ok_or_else(|| anyhow::anyhow!("Invalid upper bound"))
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    if args.json && args.format.is_some() {
        return Err(anyhow::anyhow!("--format cannot be used with --json"));
    }
    OutputMode::check_format(args.format.as_deref())?;

    let store = ctx.open_store()?;
    let entries = if args.since.is_some() || args.until.is_some() {
        let today = ctx.today()?;
        let start = match args.since.as_deref() {
            Some(value) => parse_date(value, today)?,
            None => earliest_day()?,
        };
        let end = match args.until.as_deref() {
            Some(value) => parse_date(value, today)?,
            None => latest_day()?,
        };
        store.list_between(start, end)?
    } else {
        store.list_all()?
    };
    tracing::debug!(count = entries.len(), "listed entries");

    let ui = ctx.ui_context(args.json, args.format.as_deref());
    print_entry_list(&ui, &entries, ctx.quiet())
}
