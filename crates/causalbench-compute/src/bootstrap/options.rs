//! Execution options of a bootstrap run.

use serde::{Deserialize, Serialize};

use causalbench_core::config::bootstrap_config::SEQUENTIAL_WORKERS;
use causalbench_core::BenchConfig;

/// How a `Bootstrap` prepares and executes its replicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapOptions {
    /// Standardize every frame (mean 0, sd 1) before resampling.
    pub standardize: bool,
    /// Worker pool size; 0 runs replicates sequentially.
    pub workers: usize,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            standardize: false,
            workers: SEQUENTIAL_WORKERS,
        }
    }
}

impl BootstrapOptions {
    pub fn from_config(config: &BenchConfig) -> Self {
        Self {
            standardize: config.bootstrap.effective_standardize(),
            workers: config.bootstrap.effective_workers(),
        }
    }

    pub fn is_sequential(&self) -> bool {
        self.workers == SEQUENTIAL_WORKERS
    }
}
