use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(ConfigError)` - A setting is out of range or malformed
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.crawler.job_count == 0 {
        return Err(ConfigError::Validation(
            "job-count must be at least 1".to_string(),
        ));
    }

    if config.crawler.max_concurrent_jobs == 0 {
        return Err(ConfigError::Validation(
            "max-concurrent-jobs must be at least 1".to_string(),
        ));
    }

    if Url::parse(&config.crawler.base_url).is_err() {
        return Err(ConfigError::InvalidUrl(config.crawler.base_url.clone()));
    }

    if config.output.snapshot_path.is_empty() {
        return Err(ConfigError::Validation(
            "snapshot-path must not be empty".to_string(),
        ));
    }

    if config.output.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database-path must not be empty".to_string(),
        ));
    }

    Ok(())
}
