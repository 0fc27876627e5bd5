//! UI primitives for the Moodlog CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and styling
//! - **Render**: Tables, headers, receipts, hints, month grids
//! - **Format**: String utilities (truncate, rating bars)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{
    badge, blank_line, header, hint, kv, month_grid, print, print_error, receipt, simple_table,
    Column,
};
