//! Output module: the persistence sink for completed jobs
//!
//! Every job commits its results through two independent write paths:
//! - the JSON document snapshot, overwritten at a fixed shared path
//! - one summary row appended to the SQLite execution log
//!
//! The snapshot path is shared mutably across concurrent jobs with no locking;
//! the final snapshot reflects whichever job wrote last.

mod artifacts;
mod snapshot;

pub use artifacts::save_page_markup;
pub use snapshot::write_snapshot;

use crate::crawler::ProxyRecord;
use crate::storage::{ExecutionLog, RunSummary, TIME_FORMAT};
use crate::Result;
use chrono::{DateTime, Duration, Local};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Persistence sink shared by all jobs in a batch
#[derive(Clone)]
pub struct Sink {
    snapshot_path: PathBuf,
    log: Arc<Mutex<dyn ExecutionLog + Send>>,
}

impl Sink {
    /// Creates a sink writing snapshots to `snapshot_path` and summaries to `log`
    pub fn new(snapshot_path: impl Into<PathBuf>, log: Arc<Mutex<dyn ExecutionLog + Send>>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            log,
        }
    }

    /// Commits one completed job's results
    ///
    /// The snapshot write and the log append are independent operations invoked
    /// in sequence: a snapshot failure is logged but does not prevent the log
    /// append from being attempted. Either failure still fails the job.
    ///
    /// The recorded start time is back-dated one minute from the end time and
    /// the page count is recorded as zero; both reproduce the reference
    /// behavior rather than the job's real values.
    pub fn persist(
        &self,
        started_at: DateTime<Local>,
        finished_at: DateTime<Local>,
        records: &[ProxyRecord],
    ) -> Result<()> {
        tracing::debug!(
            "persisting {} records (job ran {}s)",
            records.len(),
            (finished_at - started_at).num_seconds()
        );

        let snapshot_result = write_snapshot(&self.snapshot_path, records);
        if let Err(e) = &snapshot_result {
            tracing::warn!("snapshot write failed, still recording run summary: {e}");
        }

        let recorded_start = finished_at - Duration::minutes(1);
        let summary = RunSummary {
            started_at: recorded_start.format(TIME_FORMAT).to_string(),
            finished_at: finished_at.format(TIME_FORMAT).to_string(),
            total_pages: 0,
            total_proxies: records.len() as u32,
        };
        let log_result = self.log.lock().unwrap().append_run(&summary);

        snapshot_result?;
        log_result?;
        Ok(())
    }
}
