//! Proxy-Harvest main entry point
//!
//! Command-line interface for the bounded-concurrency proxy listing crawler.

use clap::Parser;
use proxy_harvest::config::{load_config, Config};
use proxy_harvest::crawler::harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Proxy-Harvest: a bounded-concurrency proxy listing crawler
///
/// Crawls a paginated proxy listing with a fixed batch of concurrent jobs,
/// writing a JSON snapshot of the extracted records and one execution-log row
/// per completed job.
#[derive(Parser, Debug)]
#[command(name = "proxy-harvest")]
#[command(version)]
#[command(about = "A bounded-concurrency proxy listing crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, falling back to the built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    tracing::info!(
        "Harvesting {} with {} jobs ({} concurrent)",
        config.crawler.base_url,
        config.crawler.job_count,
        config.crawler.max_concurrent_jobs
    );

    // Any error escaping the batch is reported and suppressed; the elapsed
    // duration is reported either way and the process does not crash.
    let started = std::time::Instant::now();
    match harvest(config).await {
        Ok(report) => {
            if report.jobs_failed > 0 {
                tracing::error!(
                    "{} of {} jobs failed",
                    report.jobs_failed,
                    report.jobs_dispatched
                );
            }
        }
        Err(e) => {
            tracing::error!("An error occurred: {e}");
        }
    }
    println!(
        "Execution completed in {:.2} seconds.",
        started.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("proxy_harvest=info,warn"),
            1 => EnvFilter::new("proxy_harvest=debug,info"),
            2 => EnvFilter::new("proxy_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
