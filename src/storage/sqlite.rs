//! SQLite execution log implementation
//!
//! This module provides a SQLite-based implementation of the ExecutionLog
//! trait. Appends from concurrent jobs rely on SQLite's own write locking; no
//! additional transaction isolation is layered on top.

use crate::storage::schema::initialize_schema;
use crate::storage::{ExecutionLog, RunSummary, StorageResult};
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite execution log backend
pub struct SqliteExecutionLog {
    conn: Connection,
}

impl SqliteExecutionLog {
    /// Opens (or creates) the execution log database at the given path
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteExecutionLog)` - Successfully opened/created database
    /// * `Err(StorageError)` - Failed to open database
    pub fn new(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;

        // Configure SQLite for better performance
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        // Initialize schema
        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl ExecutionLog for SqliteExecutionLog {
    fn append_run(&mut self, summary: &RunSummary) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO ExecutionInfo (StartTime, EndTime, TotalPages, TotalProxies)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                summary.started_at,
                summary.finished_at,
                summary.total_pages,
                summary.total_proxies
            ],
        )?;
        Ok(())
    }

    fn list_runs(&self) -> StorageResult<Vec<RunSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT StartTime, EndTime, TotalPages, TotalProxies
             FROM ExecutionInfo ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(RunSummary {
                started_at: row.get(0)?,
                finished_at: row.get(1)?,
                total_pages: row.get(2)?,
                total_proxies: row.get(3)?,
            })
        })?;

        let mut runs = Vec::new();
        for run in rows {
            runs.push(run?);
        }
        Ok(runs)
    }
}
