//! Application context for the Moodlog CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use chrono::NaiveDate;
use once_cell::unsync::OnceCell;

use moodlog_core::storage::{FileConnectionProvider, SqliteMoodStore};

use crate::cli::Cli;
use crate::config::MoodlogConfig;
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_store_path, today_in};

pub type Store = SqliteMoodStore<FileConnectionProvider>;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<MoodlogConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the underlying CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading lazily. `None` when no config exists.
    pub fn config(&self) -> anyhow::Result<Option<&MoodlogConfig>> {
        let config = self.config.get_or_try_init(load_config)?;
        Ok(config.as_ref())
    }

    /// Resolve the store path from `--store`, `MOODLOG_PATH`, or config.
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli, self.config()?)
    }

    fn existing_store_path(&self) -> anyhow::Result<PathBuf> {
        let path = self.store_path()?;
        if !path.exists() {
            return Err(CliError::not_found(
                format!("No mood store found at {}", path.display()),
                "Hint: Run `moodlog init`, or point MOODLOG_PATH at an existing store.",
            )
            .into());
        }
        Ok(path)
    }

    /// Open the store, failing with a hint if it has not been initialized.
    pub fn open_store(&self) -> anyhow::Result<Store> {
        let path = self.existing_store_path()?;
        tracing::debug!(path = %path.display(), "opening mood store");
        Ok(SqliteMoodStore::open_path(&path)?)
    }

    /// Handle on the store file that leaves its schema untouched.
    pub fn inspect_store(&self) -> anyhow::Result<Store> {
        let path = self.existing_store_path()?;
        tracing::debug!(path = %path.display(), "inspecting mood store");
        Ok(SqliteMoodStore::inspect_path(&path))
    }

    /// Today's date in the configured timezone.
    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        let timezone = self
            .config()?
            .and_then(|config| config.ui.timezone.as_deref());
        today_in(timezone)
    }

    /// Build a UI context for rendering.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
