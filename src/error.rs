//! Error types for the atlas generation pipeline.
//!
//! Every variant is fatal to the run: the pipeline never recovers locally
//! and never continues with later fonts once an error surfaces.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort an atlas generation run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The overrides document is missing or is not valid JSON.
    #[error("failed to load overrides from {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// A job referenced a font source that does not exist.
    #[error("font source does not exist: {path}")]
    Validation { path: PathBuf },

    /// The external atlas tool could not be started or exited non-zero.
    #[error("atlas tool `{program}` failed: {detail}")]
    ToolExecution { program: String, detail: String },

    /// An expected tool output file was absent after a successful invocation.
    ///
    /// This indicates a tool/argument mismatch and is never silently skipped.
    #[error("expected tool output missing: {path}")]
    MissingArtifact { path: PathBuf },

    /// Filesystem access failed (directory listing, rename, mkdir).
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
