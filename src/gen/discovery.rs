//! Font source discovery
//!
//! Lists the source directory and keeps every entry whose name ends with one
//! of the supported font extensions. Order is whatever the directory listing
//! yields; callers must not read meaning into it.

use crate::error::PipelineError;
use crate::gen::FontSource;
use std::fs;
use std::path::Path;

/// Supported font file extensions, matched case-sensitively by suffix.
pub const FONT_EXTENSIONS: [&str; 4] = [".ttf", ".otf", ".woff", ".woff2"];

/// List the font sources in `source_dir`.
///
/// Re-invocation re-reads the directory; an unreadable directory is fatal.
pub fn discover(source_dir: &Path) -> Result<Vec<FontSource>, PipelineError> {
    let entries = fs::read_dir(source_dir).map_err(|e| {
        PipelineError::io(
            format!("failed to list source directory {}", source_dir.display()),
            e,
        )
    })?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            PipelineError::io(
                format!("failed to read entry in {}", source_dir.display()),
                e,
            )
        })?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(extension) = FONT_EXTENSIONS.iter().find(|ext| name.ends_with(*ext)) else {
            continue;
        };
        let base_name = name.split('.').next().unwrap_or(name);
        sources.push(FontSource {
            path: source_dir.join(name),
            base_name: base_name.to_string(),
            extension,
        });
    }
    Ok(sources)
}
