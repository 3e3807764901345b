//! Logging bootstrap for binaries and test harnesses that consume the
//! datelabel crates. The library crates themselves only emit `tracing` events.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Builds the `EnvFilter` described by the logging configuration.
///
/// ## Errors
/// Returns `CoreError::ConfigError` if the level is not a valid filter directive.
pub fn env_filter(config: &LoggingConfig) -> CoreResult<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| CoreError::ConfigError(format!("invalid log level {:?}: {e}", config.level)))
}

/// ## Summary
/// Installs a global `fmt` subscriber filtered at the configured level.
///
/// ## Errors
/// Returns `CoreError::ConfigError` if the level is invalid or a global
/// subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> CoreResult<()> {
    let filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| CoreError::ConfigError(format!("failed to install subscriber: {e}")))?;

    tracing::debug!(level = %config.level, "Logging initialized");
    Ok(())
}
