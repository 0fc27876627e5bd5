use clap::{ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;

use moodlog_core::VERSION;

/// Moodlog - a personal mood journal, one entry per day
#[derive(Parser)]
#[command(name = "moodlog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(short, long, global = true, env = "MOODLOG_PATH")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Timezone used to decide what "today" is (e.g., Europe/Dublin)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Config path override
    #[arg(long)]
    pub config_path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Mood label (e.g., Happy, Sad, Calm)
    #[arg(short, long)]
    pub mood: Option<String>,

    /// Rate the day from 1 to 5
    #[arg(short, long)]
    pub rating: Option<i32>,

    /// What you are grateful for
    #[arg(short, long)]
    pub gratitude: Option<String>,

    /// Day of the entry (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Fail instead of updating when the day already has an entry
    #[arg(long)]
    pub no_overwrite: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `today` command
#[derive(Args)]
pub struct TodayArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Day to show (YYYY-MM-DD, "today" or "yesterday")
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `calendar` command
#[derive(Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM, defaults to the current month)
    #[arg(long)]
    pub month: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["date", "id"])))]
pub struct DeleteArgs {
    /// Delete the entry for this day (no-op if the day is empty)
    #[arg(long)]
    pub date: Option<String>,

    /// Delete the entry with this ID (fails if it does not exist)
    #[arg(long)]
    pub id: Option<i64>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and an empty store
    Init(InitArgs),

    /// Record how the day went (updates the day if it already has an entry)
    Add(AddArgs),

    /// Show today's entry
    Today(TodayArgs),

    /// Show the entry for a specific day
    Show(ShowArgs),

    /// List entries
    List(ListArgs),

    /// Show a month with the days that have entries marked
    Calendar(CalendarArgs),

    /// Delete an entry by day or by ID
    Delete(DeleteArgs),

    /// Check store integrity
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init(_) => "init",
            Commands::Add(_) => "add",
            Commands::Today(_) => "today",
            Commands::Show(_) => "show",
            Commands::List(_) => "list",
            Commands::Calendar(_) => "calendar",
            Commands::Delete(_) => "delete",
            Commands::Check => "check",
            Commands::Completions(_) => "completions",
        }
    }
}
