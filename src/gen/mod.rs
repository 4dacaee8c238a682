//! The atlas generation pipeline
//!
//! For every font file discovered in the source directory, two atlases are
//! generated (a multi-channel SDF, `msdf`, and a single-channel SDF, `ssdf`)
//! by driving the external atlas tool, then renaming its output into the
//! destination directory.
//!
//! Execution is strictly sequential: one child process in flight, and a
//! font's output is renamed before the next job starts (both variants of a
//! font collide on the same transient file names in the source directory).
//! Any error at any stage halts the entire run where it stands. Fonts
//! already processed keep their artifacts, the font in progress leaves no
//! renamed output, and later fonts are never attempted.

pub mod discovery;
pub mod invocation;
pub mod output;
pub mod runner;

use crate::core::cli::CliArgs;
use crate::core::overrides::OverrideConfig;
use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// The SDF encoding variant being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Msdf,
    Ssdf,
}

impl FieldType {
    /// Per-font generation order.
    pub const ALL: [FieldType; 2] = [FieldType::Msdf, FieldType::Ssdf];

    /// Name used for destination files and override keys.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Msdf => "msdf",
            FieldType::Ssdf => "ssdf",
        }
    }

    /// Field type in the external tool's vocabulary.
    ///
    /// The tool has no native "ssdf" concept: it is its "sdf" field type,
    /// recategorized on our side.
    pub fn tool_name(self) -> &'static str {
        match self {
            FieldType::Msdf => "msdf",
            FieldType::Ssdf => "sdf",
        }
    }
}

/// A discovered font file, scoped to one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSource {
    pub path: PathBuf,
    /// File name up to the first `.`.
    pub base_name: String,
    pub extension: &'static str,
}

/// A fully resolved unit of work: one font, one field type.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub source: FontSource,
    pub field_type: FieldType,
    pub font_size: f64,
    pub distance_range: f64,
}

/// The pair of destination files produced by one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub metrics: PathBuf,
    pub image: PathBuf,
}

/// Composes discovery, override resolution, tool invocation and output
/// normalization into one sequential run.
#[derive(Debug)]
pub struct AtlasPipeline {
    font_src: PathBuf,
    font_dst: PathBuf,
    tool: String,
    charset: PathBuf,
    overrides: OverrideConfig,
}

impl AtlasPipeline {
    /// Build a pipeline from parsed CLI arguments.
    ///
    /// Loads the overrides document up front so a broken configuration
    /// aborts before any job runs.
    pub fn new(args: &CliArgs) -> Result<Self, PipelineError> {
        let overrides = OverrideConfig::load(&args.overrides_path())?;
        Ok(Self {
            font_src: args.font_src.clone(),
            font_dst: args.font_dst.clone(),
            tool: args.tool.clone(),
            charset: args.charset_path(),
            overrides,
        })
    }

    /// Run the whole batch: every discovered font, both field types.
    pub async fn run(&self) -> Result<(), PipelineError> {
        output::ensure_dest_dir(&self.font_dst).await?;

        let sources = discovery::discover(&self.font_src)?;
        if sources.is_empty() {
            warn!("No font sources found in {}", self.font_src.display());
        }

        for source in &sources {
            for field_type in FieldType::ALL {
                self.run_job(source, field_type).await?;
            }
        }
        Ok(())
    }

    async fn run_job(
        &self,
        source: &FontSource,
        field_type: FieldType,
    ) -> Result<OutputArtifact, PipelineError> {
        let params = self.overrides.resolve(&source.base_name, field_type);
        let job = GenerationJob {
            source: source.clone(),
            field_type,
            font_size: params.font_size,
            distance_range: params.distance_range,
        };

        info!(
            "Generating {} {} atlas (font-size {}, distance-range {})",
            source.base_name,
            field_type.name(),
            job.font_size,
            job.distance_range
        );

        let invocation = invocation::ToolInvocation::build(&job, &self.charset, &self.tool)?;
        runner::run_tool(&invocation).await?;
        output::normalize(&source.base_name, field_type, &self.font_src, &self.font_dst).await
    }
}
