//! Database schema definitions
//!
//! This module contains the SQL schema for the Proxy-Harvest execution log.

use rusqlite::Connection;

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- One row per completed crawl job
CREATE TABLE IF NOT EXISTS ExecutionInfo (
    StartTime TEXT NOT NULL,
    EndTime TEXT NOT NULL,
    TotalPages INTEGER NOT NULL,
    TotalProxies INTEGER NOT NULL
);
"#;

/// Initializes the database schema
///
/// Idempotent: safe to call on every open.
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}
