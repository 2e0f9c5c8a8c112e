//! Configuration module for Proxy-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All settings have defaults matching the reference deployment, so a
//! config file is optional.
//!
//! # Example
//!
//! ```no_run
//! use proxy_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Jobs per batch: {}", config.crawler.job_count);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig};

// Re-export parser functions
pub use parser::load_config;
pub use validation::validate;
