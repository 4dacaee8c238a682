//! External tool invocation building
//!
//! Turns a resolved generation job into the exact argument list the atlas
//! tool expects. The argument order is part of the tool's interface and is
//! reproduced bit-exactly.

use crate::error::PipelineError;
use crate::gen::GenerationJob;
use std::ffi::OsString;
use std::path::Path;

/// A fully built external-tool command, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl ToolInvocation {
    /// Build the invocation for one job.
    ///
    /// Fails fast if the font source does not exist; a job for a vanished
    /// file must abort the run, not be skipped.
    pub fn build(
        job: &GenerationJob,
        charset: &Path,
        program: &str,
    ) -> Result<Self, PipelineError> {
        if !job.source.path.exists() {
            return Err(PipelineError::Validation {
                path: job.source.path.clone(),
            });
        }

        let args: Vec<OsString> = vec![
            "--field-type".into(),
            job.field_type.tool_name().into(),
            "--output-type".into(),
            "json".into(),
            "--round-decimal".into(),
            "6".into(),
            "--smart-size".into(),
            "--pot".into(),
            "--font-size".into(),
            job.font_size.to_string().into(),
            "--distance-range".into(),
            job.distance_range.to_string().into(),
            "--charset-file".into(),
            charset.as_os_str().to_os_string(),
            job.source.path.as_os_str().to_os_string(),
        ];

        Ok(Self {
            program: program.to_string(),
            args,
        })
    }
}
