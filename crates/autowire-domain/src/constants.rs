//! Domain constants

/// Prefix marking a comment line in a mapping file
pub const COMMENT_PREFIX: char = '#';

/// Separator between abstraction and implementation identifiers
pub const KEY_VALUE_SEPARATOR: char = '=';
