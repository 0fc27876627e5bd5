//! Output mode routing logic.

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors and tables (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and terminal state.
    ///
    /// `--json` wins over everything. `--format plain` and `TERM=dumb` force
    /// plain. Otherwise pretty on a TTY, plain when piped.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format_flag == Some("plain") || term_is_dumb || !is_tty {
            return Self::Plain;
        }
        Self::Pretty
    }

    /// Validate a `--format` value.
    pub fn check_format(format_flag: Option<&str>) -> anyhow::Result<()> {
        match format_flag {
            None | Some("table") | Some("plain") => Ok(()),
            Some(other) => Err(anyhow::anyhow!(
                "Unknown format: {} (expected table or plain)",
                other
            )),
        }
    }

    /// Check if this mode should output JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Check if this mode should output pretty (human) format.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
