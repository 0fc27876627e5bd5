//! # Moodlog Core
//!
//! Core library for Moodlog - a personal mood journal with one entry per day.
//!
//! This crate owns entry persistence and the one-entry-per-date invariant,
//! independent of any presentation layer.
//!
//! ## Architecture
//!
//! - **storage**: `MoodStore` trait, connection providers, and the SQLite store
//! - **error**: Error taxonomy surfaced to callers

pub mod error;
pub mod storage;

pub use error::{MoodlogError, Result};
pub use storage::{MoodEntry, MoodStore, NewMoodEntry, SaveOutcome, SqliteMoodStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
