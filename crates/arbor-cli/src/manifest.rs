//! JSON run manifest for reproducibility.

use std::fs;
use std::path::Path;

use arbor_core::{ArborError, ErrorInfo};
use arbor_reduce::{ReduceConfig, ReductionReport};
use serde::{Deserialize, Serialize};

use crate::loader::LoaderStats;

/// Structured record of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    /// ISO-8601 timestamp recording when the run finished.
    pub created_at: String,
    /// Path of the analyzed edge-list file.
    pub input: String,
    /// Loader census for the input file.
    pub loader: LoaderStats,
    /// Configuration used for the run.
    pub config: ReduceConfig,
    /// Canonical hash of the input graph before reduction.
    pub input_graph_hash: String,
    /// Full reduction report.
    pub report: ReductionReport,
}

impl RunManifest {
    /// Writes the manifest to a JSON file, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<(), ArborError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                ArborError::Serde(
                    ErrorInfo::new("manifest-mkdir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            ArborError::Serde(ErrorInfo::new("manifest-serialize", err.to_string()))
        })?;
        fs::write(path, json).map_err(|err| {
            ArborError::Serde(
                ErrorInfo::new("manifest-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ArborError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            ArborError::Serde(
                ErrorInfo::new("manifest-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            ArborError::Serde(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}
