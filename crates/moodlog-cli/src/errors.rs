//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so scripts can tell a missing
//! entry from a rejected duplicate.

use std::fmt;

use moodlog_core::MoodlogError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, store, entry)
    NotFound { message: String, hint: String },

    /// The day already has an entry
    Duplicate { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Integrity check failed
    IntegrityFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::Duplicate { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::IntegrityFailed(message) => write!(f, "Integrity check failed: {}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create a Duplicate error with message and hint.
    pub fn duplicate(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Duplicate {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::Duplicate { .. } => exit_codes::DUPLICATE_ENTRY,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::IntegrityFailed(_) => exit_codes::INTEGRITY_FAILED,
        }
    }
}

/// Pick the process exit code for an error bubbling out of a command.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<MoodlogError>() {
        Some(MoodlogError::DuplicateEntry(_)) => exit_codes::DUPLICATE_ENTRY,
        Some(MoodlogError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(MoodlogError::InvalidDate(_)) => exit_codes::INVALID_INPUT,
        _ => 1,
    }
}
