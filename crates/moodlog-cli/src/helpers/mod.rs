//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Prompting for mood, rating, and gratitude (`input`)
//! - Date, month, and rating parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::read_entry_fields;
pub use parsing::{month_bounds, parse_date, parse_month};
