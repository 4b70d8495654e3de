//! Structured logging with tracing
//!
//! Installs the global subscriber. The `AUTOWIRE_LOG` environment variable
//! takes precedence over the configured level.

use autowire_domain::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// Fails if the level is invalid or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    // Layer types differ, so each format gets its own branch
    let installed = if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        Registry::default().with(filter).with(stderr).try_init()
    } else {
        let stderr = fmt::layer().with_writer(std::io::stderr).with_target(true);
        Registry::default().with(filter).with(stderr).try_init()
    };
    installed.map_err(|e| Error::configuration(format!("Cannot install logger: {e}")))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
