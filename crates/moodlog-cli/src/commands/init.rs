use std::path::PathBuf;

use moodlog_core::{SqliteMoodStore, VERSION};

use crate::app::{resolve_config_path, today_in, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_store_path, write_config, MoodlogConfig};
use crate::errors::CliError;
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, hint, kv, print, Badge, OutputMode};

fn parse_timezone(value: Option<&str>) -> anyhow::Result<Option<String>> {
    let trimmed = value.unwrap_or("").trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }

    let tz = trimmed
        .parse::<chrono_tz::Tz>()
        .map_err(|_| CliError::invalid_input(format!("Invalid timezone: {}", trimmed)))?;
    Ok(Some(tz.to_string()))
}

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);

    let store_path = match args.path.clone().or_else(|| ctx.cli().store.clone()) {
        Some(value) => PathBuf::from(value),
        None => default_store_path()?,
    };
    let config_path = match args.config_path.as_deref() {
        Some(value) => PathBuf::from(value),
        None => resolve_config_path()?,
    };
    let overwriting = config_path.exists();
    if overwriting && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}\nHint: Re-run with --force to overwrite it.",
            config_path.display()
        ));
    }

    let timezone = parse_timezone(args.timezone.as_deref())?;
    let today = today_in(timezone.as_deref())?;

    if let Some(parent) = store_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create store directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let _ = SqliteMoodStore::open_path(&store_path)?;
    tracing::debug!(path = %store_path.display(), "store ready");

    let config = MoodlogConfig::new(store_path.clone(), timezone.clone());
    write_config(&config_path, &config)?;

    if ctx.quiet() {
        return Ok(());
    }
    match ui_ctx.mode {
        OutputMode::Pretty => {
            let version_line = format!("Moodlog v{}", VERSION);
            println!("{}", styled(&version_line, styles::dim(), ui_ctx.color));
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Ok,
                    &format!("Store ready at {}", store_path.display()),
                ),
            );
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Ok,
                    &format!("Config written to {}", config_path.display()),
                ),
            );
            if overwriting {
                print(
                    &ui_ctx,
                    &badge(&ui_ctx, Badge::Warn, "Replaced the previous config file"),
                );
            }
            print(
                &ui_ctx,
                &kv(&ui_ctx, "Today", &today.format("%Y-%m-%d").to_string()),
            );
            println!();
            print(&ui_ctx, &hint(&ui_ctx, "Run `moodlog add` to record today."));
        }
        _ => {
            println!("status=ok");
            println!("store={}", store_path.display());
            println!("config={}", config_path.display());
            println!("timezone={}", timezone.as_deref().unwrap_or("auto"));
        }
    }
    Ok(())
}
