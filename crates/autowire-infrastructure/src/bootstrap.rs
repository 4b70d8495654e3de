//! Mapping file bootstrap
//!
//! Writes a default mapping file for first runs. The mapping loader itself
//! never creates or modifies files; this is the only writer.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use autowire_domain::Result;
use tracing::info;

use crate::constants::MAPPING_FILE_HEADER;
use crate::error_ext::ErrorContext;

/// Render mapping entries as file content with the standard header comment
pub fn render_mapping(entries: &[(&str, &str)]) -> String {
    let mut content = String::from(MAPPING_FILE_HEADER);
    content.push('\n');
    for (abstraction, implementation) in entries {
        content.push_str(abstraction);
        content.push('=');
        content.push_str(implementation);
        content.push('\n');
    }
    content
}

/// Create `path` with `content` unless it already exists
///
/// Returns `true` if the file was created. An existing file is never touched.
pub fn ensure_mapping_file(path: &Path, content: &str) -> Result<bool> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .io_context(format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(e).io_context(format!("Failed to create {}", path.display()));
        }
    };

    file.write_all(content.as_bytes())
        .io_context(format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), "Created default mapping file");
    Ok(true)
}
