//! Mapping source configuration types

use crate::constants::DEFAULT_MAPPING_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the abstraction mapping is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Path of the `key=value` mapping file
    pub path: PathBuf,

    /// Write a default mapping file when none exists
    pub create_default: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MAPPING_PATH),
            create_default: true,
        }
    }
}
