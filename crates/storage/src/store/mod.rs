#![forbid(unsafe_code)]

mod archive;
mod connect;
mod eliminate;
mod error;
mod notes;
mod requests;
mod retype;
mod support;
mod topics;
mod types;

pub use error::StoreError;
pub use requests::*;
pub use types::*;

use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use std::time::Duration;
use support::*;

const DB_FILE_NAME: &str = "bubblemind.db";

/// Durable store for thoughts, solutions and topics.
///
/// Every public mutation runs in its own SQLite transaction and is committed
/// before returning. Writers take `&mut self`, so one store handle serializes
/// structural changes.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: Option<PathBuf>,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let db_path = storage_dir.join(DB_FILE_NAME);
        let conn = Connection::open(&db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        migrate_sqlite_schema(&conn)?;

        tracing::info!(path = %db_path.display(), "store opened");
        Ok(Self {
            conn,
            storage_dir: Some(storage_dir),
        })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        migrate_sqlite_schema(&conn)?;
        Ok(Self {
            conn,
            storage_dir: None,
        })
    }

    /// `None` for in-memory stores.
    pub fn storage_dir(&self) -> Option<&Path> {
        self.storage_dir.as_deref()
    }

    pub fn schema_version(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .conn
            .query_row(
                "SELECT value FROM meta WHERE key=?1",
                params!["schema_version"],
                |row| row.get::<_, String>(0),
            )
            .optional()?)
    }

    /// Drops every note and topic and restarts id allocation.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        let notes = tx.execute("DELETE FROM notes", [])?;
        let topics = tx.execute("DELETE FROM topics", [])?;
        tx.execute("DELETE FROM counters", [])?;
        tx.commit()?;
        tracing::info!(notes, topics, "store reset");
        Ok(())
    }
}
