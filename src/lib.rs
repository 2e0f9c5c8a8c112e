//! Proxy-Harvest: a bounded-concurrency proxy listing crawler
//!
//! This crate crawls a paginated proxy-listing site, extracts structured proxy
//! records from each page, and persists both a JSON snapshot of the records and
//! a per-job summary row in a SQLite execution log. A fixed number of crawl
//! jobs run per batch, bounded by a concurrency ceiling.

pub mod config;
pub mod crawler;
pub mod output;
pub mod storage;

use thiserror::Error;

/// Main error type for Proxy-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid port value in row: {value:?}")]
    PortParse { value: String },

    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Snapshot serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Proxy-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{harvest, Orchestrator, PageRenderer, ProxyRecord, RunReport};
pub use output::Sink;
