//! Connection providers.
//!
//! A provider hands out a ready-to-use SQLite connection per call. The
//! store never keeps a connection open between operations.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::Connection;

use crate::error::{MoodlogError, Result};

/// How long a writer waits for another writer's lock before giving up.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Supplies a fresh storage handle for a single operation.
pub trait ConnectionProvider: Send + Sync {
    /// Open a connection. Failures are `MoodlogError::StorageUnavailable`.
    fn connect(&self) -> Result<Connection>;
}

/// Opens a connection to a SQLite file on every call.
#[derive(Debug, Clone)]
pub struct FileConnectionProvider {
    path: PathBuf,
}

impl FileConnectionProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConnectionProvider for FileConnectionProvider {
    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path).map_err(|e| {
            MoodlogError::StorageUnavailable(format!(
                "Cannot open {}: {}",
                self.path.display(),
                e
            ))
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}
