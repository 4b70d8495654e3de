//! Configuration types module

pub mod logging;
pub mod mapping;

pub use logging::LoggingConfig;
pub use mapping::MappingConfig;

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Mapping source
    pub mapping: MappingConfig,
    /// Logging
    pub logging: LoggingConfig,
}
