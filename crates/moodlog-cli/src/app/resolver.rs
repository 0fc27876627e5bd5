//! Path resolution for config and store files.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, Utc};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, MoodlogConfig};

/// Resolve the config file path, checking MOODLOG_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("MOODLOG_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if it exists.
pub fn load_config() -> anyhow::Result<Option<MoodlogConfig>> {
    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        return Ok(None);
    }
    read_config(&config_path).map(Some)
}

/// Resolve the store file path from CLI args or config.
pub fn resolve_store_path(cli: &Cli, config: Option<&MoodlogConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_ref() {
        return Ok(PathBuf::from(path));
    }

    match config {
        Some(config) => Ok(PathBuf::from(&config.store.path)),
        None => {
            let config_path = resolve_config_path()?;
            Err(anyhow::anyhow!(missing_config_message(&config_path)))
        }
    }
}

/// Today's date in the given IANA timezone, or the system timezone.
pub fn today_in(timezone: Option<&str>) -> anyhow::Result<NaiveDate> {
    match timezone {
        Some(name) => {
            let tz = name
                .parse::<chrono_tz::Tz>()
                .map_err(|_| anyhow::anyhow!("Invalid timezone in config: {}", name))?;
            Ok(Utc::now().with_timezone(&tz).date_naive())
        }
        None => Ok(Local::now().date_naive()),
    }
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!(
        "No config found at {}\n\nRun:\n  moodlog init\n\nOr specify a store path:\n  MOODLOG_PATH=/path/to/moodlog.db moodlog init",
        config_path.display()
    )
}
