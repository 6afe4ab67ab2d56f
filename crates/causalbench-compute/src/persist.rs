//! JSON snapshots of bootstraps and comparisons.
//!
//! A snapshot holds everything needed to rebuild summaries and draw the
//! true and estimated graphs without rerunning: configuration, true graph,
//! every completed replicate and the summary. Raw frames are left out.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use causalbench_core::config::OutputConfig;
use causalbench_core::errors::PersistError;
use causalbench_core::{AdjacencyMatrix, SampleSize};

use crate::algorithm::AlgorithmConfig;
use crate::bootstrap::{Bootstrap, BootstrapOptions, BootstrapSummary};
use crate::comparison::BootstrapComparison;
use crate::task::CompletedTask;

/// A record that can be written to `<dir>/<snapshot_name>.json`.
pub trait Snapshot: Serialize + DeserializeOwned {
    fn snapshot_name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapRecord {
    pub name: String,
    pub algorithm: AlgorithmConfig,
    pub variables: Vec<String>,
    pub sample_sizes: Vec<SampleSize>,
    pub nr_bootstraps: usize,
    pub options: BootstrapOptions,
    pub true_graph: AdjacencyMatrix,
    pub tasks: Vec<CompletedTask>,
    /// `None` when the bootstrap had not run.
    pub summary: Option<BootstrapSummary>,
}

impl From<&Bootstrap> for BootstrapRecord {
    fn from(bootstrap: &Bootstrap) -> Self {
        Self {
            name: bootstrap.name().to_string(),
            algorithm: bootstrap.algorithm_config(),
            variables: bootstrap.variables().to_vec(),
            sample_sizes: bootstrap.sample_sizes().to_vec(),
            nr_bootstraps: bootstrap.nr_bootstraps(),
            options: bootstrap.options(),
            true_graph: bootstrap.true_graph().clone(),
            tasks: bootstrap.tasks().to_vec(),
            summary: bootstrap.summary().cloned(),
        }
    }
}

impl Snapshot for BootstrapRecord {
    fn snapshot_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub name: String,
    pub all_variables: Vec<String>,
    pub all_var_true_graph: Option<AdjacencyMatrix>,
    pub bootstraps: Vec<BootstrapRecord>,
}

impl From<&BootstrapComparison> for ComparisonRecord {
    fn from(comparison: &BootstrapComparison) -> Self {
        Self {
            name: comparison.name().to_string(),
            all_variables: comparison.all_variables().to_vec(),
            all_var_true_graph: comparison.all_var_true_graph().cloned(),
            bootstraps: comparison.iter().map(BootstrapRecord::from).collect(),
        }
    }
}

impl Snapshot for ComparisonRecord {
    fn snapshot_name(&self) -> &str {
        &self.name
    }
}

/// Path a record named `name` is saved to inside `dir`. Characters other
/// than ASCII alphanumerics, `-`, `_` and `.` become `_`.
pub fn snapshot_path(dir: &Path, name: &str) -> PathBuf {
    let file: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    dir.join(format!("{file}.json"))
}

/// Write `record` as pretty JSON, creating `dir` if needed.
///
/// An existing snapshot of the same name is replaced with a warning, or
/// left untouched with `PersistError::AlreadyExists` when `overwrite` is off.
pub fn save_snapshot<R: Snapshot>(record: &R, dir: &Path, overwrite: bool) -> Result<PathBuf, PersistError> {
    let path = snapshot_path(dir, record.snapshot_name());
    if path.exists() {
        if !overwrite {
            return Err(PersistError::AlreadyExists { path });
        }
        tracing::warn!(path = %path.display(), "overwriting existing snapshot");
    }

    std::fs::create_dir_all(dir).map_err(|source| PersistError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let json = serde_json::to_string_pretty(record).map_err(|e| PersistError::Serialization {
        path: path.clone(),
        message: e.to_string(),
    })?;
    std::fs::write(&path, json).map_err(|source| PersistError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "snapshot written");
    Ok(path)
}

/// `save_snapshot` into the configured results directory, with the
/// configured overwrite policy.
pub fn save_to_results<R: Snapshot>(record: &R, output: &OutputConfig) -> Result<PathBuf, PersistError> {
    save_snapshot(record, &output.effective_results_dir(), output.effective_overwrite())
}

pub fn load_snapshot<R: Snapshot>(path: &Path) -> Result<R, PersistError> {
    if !path.exists() {
        return Err(PersistError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let record = serde_json::from_str(&content).map_err(|e| PersistError::Serialization {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::info!(path = %path.display(), "snapshot loaded");
    Ok(record)
}
