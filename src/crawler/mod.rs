//! Crawler module: the bounded-concurrency extraction pipeline
//!
//! This module contains the core pipeline logic:
//! - Page rendering capability (trait seam plus the HTTP implementation)
//! - Pagination over the listing's pages
//! - Record extraction from raw markup
//! - Orchestration of concurrent crawl jobs

mod extractor;
mod fetcher;
mod orchestrator;
mod paginator;

pub use extractor::{extract, ProxyRecord};
pub use fetcher::{build_http_client, HttpRenderer, PageRenderer};
pub use orchestrator::{Orchestrator, RunReport};
pub use paginator::{crawl, CrawlOutcome};

use crate::config::Config;
use crate::output::Sink;
use crate::storage::{ExecutionLog, SqliteExecutionLog};
use crate::Result;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Runs a complete harvest batch with the production HTTP renderer
///
/// This is the main entry point. It will:
/// 1. Open the execution log database
/// 2. Build the HTTP client
/// 3. Dispatch all crawl jobs under the configured concurrency ceiling
/// 4. Wait for every job and report the batch outcome
///
/// # Arguments
///
/// * `config` - The harvest configuration
///
/// # Returns
///
/// * `Ok(RunReport)` - Batch finished; per-job failures are inside the report
/// * `Err(HarvestError)` - Setup failed before any job was dispatched
pub async fn harvest(config: Config) -> Result<RunReport> {
    let log = SqliteExecutionLog::new(Path::new(&config.output.database_path))?;
    let log: Arc<Mutex<dyn ExecutionLog + Send>> = Arc::new(Mutex::new(log));
    let sink = Sink::new(config.output.snapshot_path.clone(), log);

    let client = build_http_client()?;
    let orchestrator = Orchestrator::new(config, sink, move || HttpRenderer::new(client.clone()));

    Ok(orchestrator.run().await)
}
