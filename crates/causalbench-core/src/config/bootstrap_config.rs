//! Bootstrap execution configuration.

use serde::{Deserialize, Serialize};

/// Default number of bootstrap replicates.
pub const DEFAULT_NR_BOOTSTRAPS: usize = 100;

/// Worker count meaning "run replicates sequentially".
pub const SEQUENTIAL_WORKERS: usize = 0;

/// Configuration for bootstrap runs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Replicates per bootstrap. Default: 100.
    pub nr_bootstraps: Option<usize>,
    /// Worker pool size. 0 runs sequentially. Default: 0.
    pub workers: Option<usize>,
    /// Standardize every frame before resampling. Default: false.
    pub standardize: Option<bool>,
}

impl BootstrapConfig {
    /// Returns the effective replicate count, defaulting to 100.
    pub fn effective_nr_bootstraps(&self) -> usize {
        self.nr_bootstraps.unwrap_or(DEFAULT_NR_BOOTSTRAPS)
    }

    /// Returns the effective worker count, defaulting to sequential.
    pub fn effective_workers(&self) -> usize {
        self.workers.unwrap_or(SEQUENTIAL_WORKERS)
    }

    pub fn effective_standardize(&self) -> bool {
        self.standardize.unwrap_or(false)
    }
}
