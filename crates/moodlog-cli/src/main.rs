//! Moodlog CLI - a personal mood journal, one entry per day
//!
//! This is the command-line interface for Moodlog. It wraps the core
//! mood store with prompts, tables, and a month calendar.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use moodlog_core::MoodlogError;

use app::AppContext;
use cli::{Cli, Commands};
use commands::calendar::handle_calendar;
use commands::entries::{handle_add, handle_delete, handle_list, handle_show, handle_today};
use commands::init::handle_init;
use commands::maintenance::handle_check;
use commands::misc::handle_completions;
use errors::exit_code_for;
use ui::{print, print_error};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = AppContext::new(&cli);
    if let Err(err) = run(&ctx) {
        tracing::debug!(error = ?err, "command failed");
        let ui = ctx.ui_context(false, None);
        let text = err.to_string();
        let (message, hint) = split_hint(&text);
        let hint = hint.or_else(|| storage_hint(&err));
        print_error(&ui, message, hint);
        std::process::exit(exit_code_for(&err));
    }
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    if let Some(command) = &ctx.cli().command {
        tracing::debug!(command = command.name(), "dispatching");
    }
    match &ctx.cli().command {
        Some(Commands::Init(args)) => handle_init(ctx, args),
        Some(Commands::Add(args)) => handle_add(ctx, args),
        Some(Commands::Today(args)) => handle_today(ctx, args),
        Some(Commands::Show(args)) => handle_show(ctx, args),
        Some(Commands::List(args)) => handle_list(ctx, args),
        Some(Commands::Calendar(args)) => handle_calendar(ctx, args),
        Some(Commands::Delete(args)) => handle_delete(ctx, args),
        Some(Commands::Check) => handle_check(ctx),
        Some(Commands::Completions(args)) => handle_completions(args.shell),
        None => {
            let ui = ctx.ui_context(false, None);
            print(&ui, &quickstart());
            Ok(())
        }
    }
}

fn quickstart() -> String {
    [
        "Moodlog - one mood entry per day",
        "",
        "Quick start:",
        "  moodlog init",
        "  moodlog add --mood Happy --rating 5 --gratitude \"sunshine\"",
        "  moodlog today",
        "  moodlog calendar",
        "",
        "Run `moodlog --help` for all commands.",
    ]
    .join("\n")
}

/// Hint for failures where the store itself could not be used.
fn storage_hint(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<MoodlogError>() {
        Some(core) if !core.is_recoverable() => {
            Some("Hint: Check the store path, then run `moodlog check`.")
        }
        _ => None,
    }
}

/// Split "message\nHint: ..." into its message and hint parts.
fn split_hint(text: &str) -> (&str, Option<&str>) {
    match text.find("\nHint: ") {
        Some(index) => (&text[..index], Some(&text[index + 1..])),
        None => (text, None),
    }
}
