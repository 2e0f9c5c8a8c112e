use serde::Deserialize;

/// Main configuration structure for Proxy-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Entry URL of the paginated proxy listing
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Number of crawl jobs dispatched per batch
    #[serde(rename = "job-count", default = "default_job_count")]
    pub job_count: u32,

    /// Maximum number of jobs in flight at any instant
    #[serde(rename = "max-concurrent-jobs", default = "default_max_concurrent_jobs")]
    pub max_concurrent_jobs: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            job_count: default_job_count(),
            max_concurrent_jobs: default_max_concurrent_jobs(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON document snapshot, shared by all jobs
    #[serde(rename = "snapshot-path", default = "default_snapshot_path")]
    pub snapshot_path: String,

    /// Path to the SQLite execution log database
    #[serde(rename = "database-path", default = "default_database_path")]
    pub database_path: String,

    /// Directory holding one raw-markup artifact per crawled page
    #[serde(rename = "pages-dir", default = "default_pages_dir")]
    pub pages_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            database_path: default_database_path(),
            pages_dir: default_pages_dir(),
        }
    }
}

fn default_base_url() -> String {
    "https://fineproxy.org/pt/free-proxy/".to_string()
}

fn default_job_count() -> u32 {
    10
}

fn default_max_concurrent_jobs() -> u32 {
    3
}

fn default_snapshot_path() -> String {
    "proxies.json".to_string()
}

fn default_database_path() -> String {
    "proxies.db".to_string()
}

fn default_pages_dir() -> String {
    "html_pages".to_string()
}
