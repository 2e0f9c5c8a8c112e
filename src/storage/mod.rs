//! Storage module for the execution log
//!
//! Each completed crawl job appends one summary row to the `ExecutionInfo`
//! table. Rows are append-only; nothing in this system updates or deletes them.

mod schema;
mod sqlite;

pub use schema::{initialize_schema, SCHEMA_SQL};
pub use sqlite::SqliteExecutionLog;

use thiserror::Error;

/// Timestamp format used in the execution log (`yyyy-MM-dd HH:mm:ss`)
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// One row of the execution log
///
/// `started_at` is the recorded start time, which the sink back-dates by a
/// fixed one-minute offset from the end time; `total_pages` is always recorded
/// as zero. Both are preserved reference behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub started_at: String,
    pub finished_at: String,
    pub total_pages: u32,
    pub total_proxies: u32,
}

/// Trait for execution log backends
///
/// The crawler only ever appends; `list_runs` exists for reporting and tests.
pub trait ExecutionLog {
    /// Appends one run summary row to the log
    fn append_run(&mut self, summary: &RunSummary) -> StorageResult<()>;

    /// Returns all recorded run summaries in insertion order
    fn list_runs(&self) -> StorageResult<Vec<RunSummary>>;
}
