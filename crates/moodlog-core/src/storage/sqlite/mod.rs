//! SQLite storage backend.
//!
//! Each operation asks the provider for its own connection and drops it
//! before returning. Writes that depend on a prior read run inside an
//! IMMEDIATE transaction so two submissions for the same date cannot both
//! pass the existence check; the UNIQUE index on `entryDate` backs that up.

mod row;

use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior};

use crate::error::{MoodlogError, Result};
use crate::storage::connection::{ConnectionProvider, FileConnectionProvider};
use crate::storage::traits::MoodStore;
use crate::storage::types::{IntegrityReport, MoodEntry, NewMoodEntry, SaveOutcome};

use row::{date_key, parse_date_key, MoodRow, ENTRY_COLUMNS};
pub use row::{MAX_YEAR, MIN_YEAR};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS moodentries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    mood TEXT NOT NULL,
    rating INTEGER NOT NULL,
    gratitude TEXT NOT NULL DEFAULT '',
    entryDate TEXT NOT NULL UNIQUE
);

-- Older tables may lack the column constraint
CREATE UNIQUE INDEX IF NOT EXISTS moodentries_entry_date
ON moodentries (entryDate);
"#;

/// SQLite-backed mood entry store.
pub struct SqliteMoodStore<P: ConnectionProvider> {
    provider: P,
}

impl SqliteMoodStore<FileConnectionProvider> {
    /// Open (creating if needed) a store backed by a SQLite file.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(FileConnectionProvider::new(path.as_ref()))
    }

    /// File counterpart of [`SqliteMoodStore::inspect`].
    pub fn inspect_path(path: impl AsRef<Path>) -> Self {
        Self::inspect(FileConnectionProvider::new(path.as_ref()))
    }
}

impl<P: ConnectionProvider> SqliteMoodStore<P> {
    /// Wrap a provider, ensuring the schema exists.
    ///
    /// # Errors
    ///
    /// Returns `MoodlogError::StorageUnavailable` if no connection can be
    /// obtained, or if an existing table already holds two rows for one date.
    pub fn open(provider: P) -> Result<Self> {
        let conn = provider.connect()?;
        // WAL lets readers proceed while a writer holds the lock.
        let _mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch(SCHEMA).map_err(|e| {
            if is_unique_violation(&e) {
                MoodlogError::StorageUnavailable(format!(
                    "Store holds more than one entry for a date: {}",
                    e
                ))
            } else {
                e.into()
            }
        })?;
        Ok(Self { provider })
    }

    /// Wrap a provider without creating or altering the schema.
    ///
    /// Only `check_integrity` is meaningful on such a handle; it lets a
    /// store that `open` refuses (e.g. two rows for one date) be diagnosed.
    pub fn inspect(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn connect(&self) -> Result<Connection> {
        self.provider.connect()
    }

    fn query_entries(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<MoodEntry>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, MoodRow::from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.try_into()?);
        }
        Ok(entries)
    }

    fn query_entry(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Option<MoodEntry>> {
        let row = conn.query_row(sql, params, MoodRow::from_row).optional()?;
        row.map(MoodEntry::try_from).transpose()
    }

    fn insert(conn: &Connection, entry: &NewMoodEntry) -> Result<MoodEntry> {
        let key = date_key(entry.date)?;
        conn.execute(
            "INSERT INTO moodentries (mood, rating, gratitude, entryDate) VALUES (?1, ?2, ?3, ?4)",
            (
                &entry.mood,
                entry.rating,
                &entry.gratitude,
                key,
            ),
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                MoodlogError::DuplicateEntry(entry.date)
            } else {
                e.into()
            }
        })?;

        Ok(MoodEntry {
            id: conn.last_insert_rowid(),
            date: entry.date,
            mood: entry.mood.clone(),
            rating: entry.rating,
            gratitude: entry.gratitude.clone(),
        })
    }

    fn id_for_date(conn: &Connection, date: NaiveDate) -> Result<Option<i64>> {
        let key = date_key(date)?;
        let id = conn
            .query_row(
                "SELECT id FROM moodentries WHERE entryDate = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl<P: ConnectionProvider> MoodStore for SqliteMoodStore<P> {
    fn create(&self, entry: &NewMoodEntry) -> Result<MoodEntry> {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if Self::id_for_date(&tx, entry.date)?.is_some() {
            return Err(MoodlogError::DuplicateEntry(entry.date));
        }
        let created = Self::insert(&tx, entry)?;

        tx.commit()?;
        Ok(created)
    }

    fn upsert(&self, entry: &NewMoodEntry) -> Result<(MoodEntry, SaveOutcome)> {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let result = match Self::id_for_date(&tx, entry.date)? {
            Some(id) => {
                tx.execute(
                    "UPDATE moodentries SET mood = ?1, rating = ?2, gratitude = ?3 WHERE id = ?4",
                    (&entry.mood, entry.rating, &entry.gratitude, id),
                )?;
                let updated = MoodEntry {
                    id,
                    date: entry.date,
                    mood: entry.mood.clone(),
                    rating: entry.rating,
                    gratitude: entry.gratitude.clone(),
                };
                (updated, SaveOutcome::Updated)
            }
            None => (Self::insert(&tx, entry)?, SaveOutcome::Created),
        };

        tx.commit()?;
        Ok(result)
    }

    fn get_by_date(&self, date: NaiveDate) -> Result<Option<MoodEntry>> {
        let key = date_key(date)?;
        let conn = self.connect()?;
        Self::query_entry(
            &conn,
            &format!(
                "SELECT {} FROM moodentries WHERE entryDate = ?1",
                ENTRY_COLUMNS
            ),
            [key],
        )
    }

    fn get_by_id(&self, id: i64) -> Result<Option<MoodEntry>> {
        let conn = self.connect()?;
        Self::query_entry(
            &conn,
            &format!("SELECT {} FROM moodentries WHERE id = ?1", ENTRY_COLUMNS),
            [id],
        )
    }

    fn list_all(&self) -> Result<Vec<MoodEntry>> {
        let conn = self.connect()?;
        Self::query_entries(
            &conn,
            &format!("SELECT {} FROM moodentries", ENTRY_COLUMNS),
            [],
        )
    }

    fn list_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<MoodEntry>> {
        let (start_key, end_key) = (date_key(start)?, date_key(end)?);
        if start > end {
            return Ok(Vec::new());
        }
        let conn = self.connect()?;
        Self::query_entries(
            &conn,
            &format!(
                "SELECT {} FROM moodentries WHERE entryDate >= ?1 AND entryDate <= ?2 ORDER BY entryDate",
                ENTRY_COLUMNS
            ),
            [start_key, end_key],
        )
    }

    fn all_dates(&self) -> Result<BTreeSet<NaiveDate>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT DISTINCT entryDate FROM moodentries")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut dates = BTreeSet::new();
        for row in rows {
            dates.insert(parse_date_key(&row?)?);
        }
        Ok(dates)
    }

    fn delete_by_date(&self, date: NaiveDate) -> Result<bool> {
        let key = date_key(date)?;
        let conn = self.connect()?;
        let removed = conn.execute(
            "DELETE FROM moodentries WHERE entryDate = ?1",
            [key],
        )?;
        Ok(removed > 0)
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        let conn = self.connect()?;
        let removed = conn.execute("DELETE FROM moodentries WHERE id = ?1", [id])?;
        if removed == 0 {
            return Err(MoodlogError::NotFound(id));
        }
        Ok(())
    }

    fn check_integrity(&self) -> Result<IntegrityReport> {
        let conn = self.connect()?;

        let status: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if status != "ok" {
            return Err(MoodlogError::StorageUnavailable(format!(
                "Integrity check failed: {}",
                status
            )));
        }

        let duplicate: Option<String> = conn
            .query_row(
                "SELECT entryDate FROM moodentries GROUP BY entryDate HAVING COUNT(*) > 1 LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        if let Some(date) = duplicate {
            return Err(MoodlogError::StorageUnavailable(format!(
                "Integrity check failed: more than one entry for {}",
                date
            )));
        }

        let (entries, distinct_dates): (i64, i64) = conn.query_row(
            "SELECT COUNT(*), COUNT(DISTINCT entryDate) FROM moodentries",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        Ok(IntegrityReport {
            entries: entries as usize,
            distinct_dates: distinct_dates as usize,
        })
    }
}
