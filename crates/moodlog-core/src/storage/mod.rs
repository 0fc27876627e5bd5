//! Storage abstraction for Moodlog.
//!
//! This module defines the `MoodStore` trait and core types for
//! persisting date-keyed mood entries.
//!
//! ## Architecture
//!
//! - `MoodStore` is the interface presentation layers program against.
//! - `ConnectionProvider` supplies a ready-to-use SQLite handle per call.
//! - `SqliteMoodStore` implements the store on top of a provider, acquiring
//!   one connection per operation and releasing it on every exit path.
//!
//! The one-entry-per-date invariant is guarded twice: writes run inside an
//! IMMEDIATE transaction, and the `entryDate` column carries a UNIQUE constraint.

pub mod connection;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use connection::{ConnectionProvider, FileConnectionProvider};
pub use sqlite::{SqliteMoodStore, MAX_YEAR, MIN_YEAR};
pub use traits::MoodStore;
pub use types::{IntegrityReport, MoodEntry, NewMoodEntry, SaveOutcome};
