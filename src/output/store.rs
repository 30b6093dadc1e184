//! `SQLite` record store — one row per event, queryable long after the console has scrolled away.

use super::{LogRecord, RecordStore};
use crate::internal;
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use std::time::Duration;

const CREATE_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        logger TEXT NOT NULL,
        timestamp TEXT NOT NULL,
        header TEXT NOT NULL,
        message TEXT NOT NULL
    )";

/// Separate loggers (and processes) share one database file; writers wait on the lock this long.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// One row read back from the `logs` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRow {
    pub id: i64,
    pub logger: String,
    pub timestamp: String,
    pub header: String,
    pub message: String,
}

/// Holds the connection for its whole lifetime. The connection stays in autocommit mode,
/// so every insert is committed as soon as it returns.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// One store per working directory unless configured otherwise.
    pub const DEFAULT_PATH: &'static str = "logs/logs.db";

    /// Opens (or creates) the database file. The parent directory is not created.
    ///
    /// # Errors
    /// Fails if `SQLite` cannot open the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        internal::debug(&format!("Opened record store at {}", path.display()));
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Private to this handle; useful for tests and throwaway loggers.
    ///
    /// # Errors
    /// Fails if `SQLite` cannot allocate the database.
    pub fn open_in_memory() -> Result<Self, crate::Error> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
            path: None,
        })
    }

    /// `None` for in-memory stores.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads every row in insertion order.
    ///
    /// # Errors
    /// Fails if the table is missing or a row cannot be decoded.
    pub fn rows(&self) -> Result<Vec<StoredRow>, crate::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, logger, timestamp, header, message FROM logs ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StoredRow {
                    id: row.get(0)?,
                    logger: row.get(1)?,
                    timestamp: row.get(2)?,
                    header: row.get(3)?,
                    message: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl RecordStore for SqliteStore {
    fn init_schema(&self) -> Result<(), crate::Error> {
        self.conn.execute_batch(CREATE_SCHEMA)?;
        Ok(())
    }

    fn insert(&self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        self.conn.execute(
            "INSERT INTO logs (logger, timestamp, header, message) VALUES (?1, ?2, ?3, ?4)",
            params![
                record.identity,
                record.timestamp,
                record.header,
                record.message
            ],
        )?;
        Ok(())
    }
}
