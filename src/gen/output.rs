//! Output normalization
//!
//! The atlas tool drops `<base>.json` and `<base>.png` into the *source*
//! directory regardless of field type, so both variants of a font collide on
//! the same transient names. Each job's output must therefore be renamed
//! into the destination before the next job for that font starts.

use crate::error::PipelineError;
use crate::gen::{FieldType, OutputArtifact};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Create the destination directory if it is absent.
///
/// Idempotent; never touches files already present in it.
pub async fn ensure_dest_dir(dest_dir: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(dest_dir).await.map_err(|e| {
        PipelineError::io(
            format!("failed to create destination {}", dest_dir.display()),
            e,
        )
    })
}

/// Move one job's transient output into the destination directory under its
/// canonical names `<base>.<fieldType>.json` / `<base>.<fieldType>.png`.
///
/// A missing transient file after a successful tool run is fatal: it means
/// the tool and our arguments disagree about output naming.
pub async fn normalize(
    base_name: &str,
    field_type: FieldType,
    source_dir: &Path,
    dest_dir: &Path,
) -> Result<OutputArtifact, PipelineError> {
    let metrics = rename_artifact(base_name, field_type, "json", source_dir, dest_dir).await?;
    let image = rename_artifact(base_name, field_type, "png", source_dir, dest_dir).await?;
    debug!(
        "Normalized {} {} output into {}",
        base_name,
        field_type.name(),
        dest_dir.display()
    );
    Ok(OutputArtifact { metrics, image })
}

async fn rename_artifact(
    base_name: &str,
    field_type: FieldType,
    ext: &str,
    source_dir: &Path,
    dest_dir: &Path,
) -> Result<std::path::PathBuf, PipelineError> {
    let transient = source_dir.join(format!("{base_name}.{ext}"));
    if !transient.exists() {
        return Err(PipelineError::MissingArtifact { path: transient });
    }
    let dest = dest_dir.join(format!("{base_name}.{}.{ext}", field_type.name()));
    fs::rename(&transient, &dest).await.map_err(|e| {
        PipelineError::io(
            format!(
                "failed to move {} to {}",
                transient.display(),
                dest.display()
            ),
            e,
        )
    })?;
    Ok(dest)
}
