//! Abstraction to implementation mapping
//!
//! The mapping is a flat `key=value` association loaded once and read-only
//! afterwards. Keys are abstraction identifiers, values are implementation
//! identifiers.

use std::collections::HashMap;
use std::path::Path;

use crate::constants::{COMMENT_PREFIX, KEY_VALUE_SEPARATOR};
use crate::error::{Error, Result};

/// Label used in errors for mappings parsed from in-memory text
const INLINE_SOURCE: &str = "<inline>";

/// Abstraction identifier to implementation identifier association
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: HashMap<String, String>,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a mapping from a UTF-8 `key=value` file
    ///
    /// The file is only read, never created or modified.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config_load_with_source(&source_name, "cannot read mapping file", e)
        })?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        Self::parse_named(content, &source_name)
    }

    /// Parse mapping text
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_named(content, INLINE_SOURCE)
    }

    fn parse_named(content: &str, source_name: &str) -> Result<Self> {
        let mut mapping = Self::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let Some((key, value)) = line.split_once(KEY_VALUE_SEPARATOR) else {
                return Err(Error::config_load(
                    source_name,
                    format!("line {}: expected key=value, got '{}'", index + 1, line),
                ));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(Error::config_load(
                    source_name,
                    format!("line {}: blank key", index + 1),
                ));
            }

            mapping.insert(key, value.trim());
        }

        Ok(mapping)
    }

    /// Insert or replace an entry; the last write for a key wins
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// Implementation identifier mapped to `key`
    ///
    /// A present but blank value counts as no mapping.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Whether `key` has a non-blank mapping
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries, blank values included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries sorted by key
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}
