//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal facts read from the process environment.
#[derive(Debug, Clone, Default)]
pub struct TermEnv {
    pub stdout_tty: bool,
    pub term_is_dumb: bool,
    pub no_color: bool,
    pub width: Option<usize>,
}

impl TermEnv {
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            term_is_dumb: std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            width: terminal_width(),
        }
    }
}

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from the process environment and CLI flags.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        Self::resolve(
            &TermEnv::detect(),
            json_flag,
            format_flag,
            no_color_flag,
            ascii_flag,
        )
    }

    /// Combine detected terminal facts with CLI flags.
    pub fn resolve(
        env: &TermEnv,
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let color = env.stdout_tty && !no_color_flag && !env.no_color && !env.term_is_dumb;
        let mode = OutputMode::resolve(json_flag, format_flag, env.stdout_tty, env.term_is_dumb);

        Self {
            is_tty: env.stdout_tty,
            color,
            unicode: !ascii_flag,
            width: env.width.unwrap_or(80),
            mode,
        }
    }

    /// Check if interactive prompts are allowed.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

/// Get terminal width from COLUMNS or the tty.
fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ writes a winsize into the pointer on success; we only
        // read it when the call returns 0.
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}
