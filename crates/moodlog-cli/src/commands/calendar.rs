use std::collections::BTreeSet;

use chrono::NaiveDate;

use moodlog_core::MoodStore;

use crate::app::AppContext;
use crate::cli::CalendarArgs;
use crate::helpers::{month_bounds, parse_month};
use crate::output::{calendar_json, entries_json, print_entry_list};
use crate::ui::{blank_line, header, month_grid, print};

pub fn handle_calendar(ctx: &AppContext, args: &CalendarArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let today = ctx.today()?;
    let month = match args.month.as_deref() {
        Some(value) => parse_month(value)?,
        None => today,
    };
    let (first, last) = month_bounds(month)?;

    let marked: BTreeSet<NaiveDate> = store
        .all_dates()?
        .range(first..=last)
        .copied()
        .collect();
    let entries = store.list_between(first, last)?;

    if args.json {
        let mut value = calendar_json(first, &marked);
        value["entries"] = serde_json::Value::from(entries_json(&entries));
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let ui = ctx.ui_context(false, None);
    if !ctx.quiet() {
        let days_in_month = last.signed_duration_since(first).num_days() + 1;
        let count = format!("{} of {} days", marked.len(), days_in_month);
        print(&ui, &header(&ui, "calendar", Some(&count)));
        blank_line(&ui);
    }
    print(&ui, &month_grid(&ui, first, &marked, Some(today)));

    if !entries.is_empty() {
        print(&ui, "");
        print_entry_list(&ui, &entries, ctx.quiet())?;
    }
    Ok(())
}
