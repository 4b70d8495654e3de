//! Infrastructure constants

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "autowire.toml";

/// Default configuration directory name under the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "autowire";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "AUTOWIRE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Environment variable holding a log filter directive
pub const LOG_FILTER_ENV: &str = "AUTOWIRE_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default mapping file path
pub const DEFAULT_MAPPING_PATH: &str = "injector.properties";

/// Header comment written at the top of a generated mapping file
pub const MAPPING_FILE_HEADER: &str = "# mapping: interface = implementation";
