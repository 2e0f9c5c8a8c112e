//! Job orchestrator: dispatches crawl jobs under a concurrency ceiling
//!
//! A batch dispatches a fixed number of jobs, each a full
//! crawl-paginate-extract-persist cycle. A semaphore permit is acquired before
//! a job is spawned and held inside the task as an RAII guard, so the slot is
//! released on every exit path. Job failures are logged and counted; they
//! never crash the batch.

use crate::config::Config;
use crate::crawler::fetcher::PageRenderer;
use crate::crawler::paginator::crawl;
use crate::output::Sink;
use crate::Result;
use chrono::Local;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// Outcome of one orchestrated batch
#[derive(Debug)]
pub struct RunReport {
    pub jobs_dispatched: u32,
    pub jobs_succeeded: u32,
    pub jobs_failed: u32,

    /// Wall-clock duration of the entire batch
    pub elapsed: Duration,
}

/// Orchestrates a batch of crawl jobs
///
/// The renderer factory produces one fresh renderer per job, so navigation
/// state never leaks between jobs.
pub struct Orchestrator<F> {
    config: Arc<Config>,
    sink: Sink,
    factory: Arc<F>,
}

impl<F, R> Orchestrator<F>
where
    F: Fn() -> R + Send + Sync + 'static,
    R: PageRenderer + 'static,
{
    /// Creates a new orchestrator
    pub fn new(config: Config, sink: Sink, factory: F) -> Self {
        Self {
            config: Arc::new(config),
            sink,
            factory: Arc::new(factory),
        }
    }

    /// Dispatches all jobs and waits for every one to finish
    ///
    /// At most `max_concurrent_jobs` jobs are past the slot-acquire point at
    /// any instant; further jobs queue on the semaphore until a slot frees.
    /// Per-job errors are absorbed here: they are logged, counted in the
    /// report, and never abort the batch.
    pub async fn run(&self) -> RunReport {
        let started = Instant::now();
        let job_count = self.config.crawler.job_count;
        let limit = self.config.crawler.max_concurrent_jobs as usize;

        tracing::info!("dispatching {job_count} jobs, at most {limit} in flight");

        let semaphore = Arc::new(Semaphore::new(limit));
        let mut handles = Vec::with_capacity(job_count as usize);

        for job in 0..job_count {
            // Acquire the slot before the job's work begins; the permit moves
            // into the task and is released when the task ends, completed or
            // failed. The semaphore is never closed, so acquire cannot fail.
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => break,
            };

            let renderer = (self.factory)();
            let config = Arc::clone(&self.config);
            let sink = self.sink.clone();

            handles.push(tokio::spawn(async move {
                let _permit = permit;
                run_job(job, &config, renderer, &sink).await
            }));
        }

        let mut succeeded = 0;
        let mut failed = 0;
        for (job, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(Ok(count)) => {
                    tracing::info!("job {job} completed with {count} records");
                    succeeded += 1;
                }
                Ok(Err(e)) => {
                    tracing::error!("job {job} failed: {e}");
                    failed += 1;
                }
                Err(e) => {
                    tracing::error!("job {job} panicked: {e}");
                    failed += 1;
                }
            }
        }

        let elapsed = started.elapsed();
        tracing::info!(
            "batch finished: {succeeded} succeeded, {failed} failed in {elapsed:?}"
        );

        RunReport {
            jobs_dispatched: job_count,
            jobs_succeeded: succeeded,
            jobs_failed: failed,
            elapsed,
        }
    }
}

/// Runs one crawl-paginate-extract-persist cycle
async fn run_job<R: PageRenderer>(
    job: u32,
    config: &Config,
    mut renderer: R,
    sink: &Sink,
) -> Result<usize> {
    let started_at = Local::now();
    tracing::debug!("job {job} starting");

    let outcome = crawl(
        &config.crawler.base_url,
        &mut renderer,
        Path::new(&config.output.pages_dir),
    )
    .await?;

    let finished_at = Local::now();
    sink.persist(started_at, finished_at, &outcome.records)?;

    tracing::debug!(
        "job {job} persisted {} records from {} pages",
        outcome.records.len(),
        outcome.pages_visited
    );
    Ok(outcome.records.len())
}
