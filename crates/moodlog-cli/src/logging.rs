//! Diagnostic logging to stderr.
//!
//! `MOODLOG_LOG` takes an env-filter directive (e.g. `moodlog=debug`).
//! Without it, `--verbose` enables debug output and the default is warnings only.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MOODLOG_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "moodlog=debug,moodlog_core=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert!(default_directive(true).contains("moodlog=debug"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
