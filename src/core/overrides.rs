//! Per-font generation parameter overrides
//!
//! Loads `overrides.json` from the source directory: a mapping from font
//! base name to per-field-type `{fontSize, distanceRange}` customizations
//! layered over the global defaults. The document is required input; a run
//! cannot start without it.

use crate::error::PipelineError;
use crate::gen::FieldType;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_FONT_SIZE: f64 = 42.0;
pub const DEFAULT_DISTANCE_RANGE: f64 = 4.0;

/// Fully resolved generation parameters for one font/field-type pair.
///
/// The values are JSON numbers and pass through to the tool verbatim, so
/// fractional sizes are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenParams {
    pub font_size: f64,
    pub distance_range: f64,
}

/// One override entry; each field falls back to its default independently.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOverrides {
    pub font_size: Option<f64>,
    pub distance_range: Option<f64>,
}

/// The parsed overrides document, read once per run and read-only after.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverrideConfig(HashMap<String, HashMap<FieldType, FieldOverrides>>);

impl OverrideConfig {
    /// Load and parse the overrides document.
    ///
    /// A missing or unparsable document is fatal: resolution has no defined
    /// fallback policy without it.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let contents = fs::read_to_string(path).map_err(|e| PipelineError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = serde_json::from_str(&contents).map_err(|e| PipelineError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!("Loaded overrides from {}", path.display());
        Ok(config)
    }

    /// Resolve the generation parameters for one font and field type.
    ///
    /// Lookup order per field: `config[baseName][fieldType].fontSize` else 42,
    /// `config[baseName][fieldType].distanceRange` else 4. Absence at any
    /// level is valid.
    pub fn resolve(&self, base_name: &str, field_type: FieldType) -> GenParams {
        let entry = self.0.get(base_name).and_then(|fonts| fonts.get(&field_type));
        GenParams {
            font_size: entry
                .and_then(|o| o.font_size)
                .unwrap_or(DEFAULT_FONT_SIZE),
            distance_range: entry
                .and_then(|o| o.distance_range)
                .unwrap_or(DEFAULT_DISTANCE_RANGE),
        }
    }
}
