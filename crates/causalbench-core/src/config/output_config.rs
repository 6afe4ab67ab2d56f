//! Result snapshot output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default directory for result snapshots.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Configuration for persisted results.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory snapshots are written to. Default: `results`.
    pub results_dir: Option<String>,
    /// Replace an existing snapshot of the same name (with a warning).
    /// Default: true.
    pub overwrite: Option<bool>,
}

impl OutputConfig {
    pub fn effective_results_dir(&self) -> PathBuf {
        PathBuf::from(
            self.results_dir
                .as_deref()
                .unwrap_or(DEFAULT_RESULTS_DIR),
        )
    }

    pub fn effective_overwrite(&self) -> bool {
        self.overwrite.unwrap_or(true)
    }
}
