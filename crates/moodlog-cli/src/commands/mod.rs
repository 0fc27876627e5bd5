//! Command handlers, one per subcommand.

pub mod calendar;
pub mod entries;
pub mod init;
pub mod maintenance;
pub mod misc;
