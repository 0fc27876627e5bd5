//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, store, entry).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The day already has an entry and overwriting was not allowed.
    pub const DUPLICATE_ENTRY: i32 = 5;

    /// Integrity check failed.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// Mood labels offered by the interactive prompt. The store accepts any text.
pub const MOOD_SUGGESTIONS: &[&str] = &[
    "Happy", "Sad", "Anxious", "Excited", "Calm", "Angry", "Neutral",
];

/// Inclusive rating bounds enforced at input time.
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;
