//! Application-level utilities for the Moodlog CLI.
//!
//! This module provides:
//! - Path resolution for config and store files
//! - The per-invocation application context

mod context;
mod resolver;

// Re-export public API
pub use context::{AppContext, Store};
pub use resolver::{resolve_config_path, today_in};
