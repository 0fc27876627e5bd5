use moodlog_core::MoodStore;

use crate::app::AppContext;
use crate::errors::CliError;

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.inspect_store()?;
    match store.check_integrity() {
        Ok(report) => {
            if !ctx.quiet() {
                println!("Integrity check: OK");
                println!("- database pages: OK");
                println!("- one entry per day: OK");
                println!("- entries: {}", report.entries);
                println!("- days: {}", report.distinct_dates);
            }
        }
        Err(err) => {
            eprintln!("Integrity check: FAILED");
            eprintln!("- error: {}", err);
            eprintln!("Hint: Restore the store from a backup before retrying.");
            return Err(CliError::IntegrityFailed(err.to_string()).into());
        }
    }
    Ok(())
}
