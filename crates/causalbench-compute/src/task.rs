//! One replicate: fit an algorithm on one resampled dataset and derive the
//! statistics a bootstrap aggregates.

use serde::{Deserialize, Serialize};

use causalbench_core::data::{enforce_columns, pool};
use causalbench_core::errors::{BenchErrorCode, DataError, TaskError};
use causalbench_core::{AdjacencyMatrix, Frame};

use crate::algorithm::{fit_timed, CausalAlgorithm};
use crate::extensions::{average_extension, consistent_extensions};
use crate::sortability::{r2_sortability, var_sortability};

/// A single algorithm fit against one dataset sample.
///
/// Created fresh per replicate, consumed by `run`. Nothing that happens
/// inside `run` can fail the task: algorithm crashes and graphs without a
/// consistent extension are recorded in the `CompletedTask`.
pub struct CausalInferenceTask {
    replicate: usize,
    algorithm: Box<dyn CausalAlgorithm>,
    data: Vec<Frame>,
    true_graph: AdjacencyMatrix,
}

impl CausalInferenceTask {
    /// Every frame must carry exactly the true graph's variables, in order.
    pub fn new(
        replicate: usize,
        algorithm: Box<dyn CausalAlgorithm>,
        data: Vec<Frame>,
        true_graph: AdjacencyMatrix,
    ) -> Result<Self, TaskError> {
        enforce_columns(&data, true_graph.labels()).map_err(|e| match e {
            DataError::ColumnMismatch {
                expected, found, ..
            } => TaskError::VariableMismatch {
                data: found,
                graph: expected,
            },
            other => TaskError::Data(other),
        })?;
        Ok(Self {
            replicate,
            algorithm,
            data,
            true_graph,
        })
    }

    pub fn replicate(&self) -> usize {
        self.replicate
    }

    pub fn run(mut self) -> CompletedTask {
        let replicate = self.replicate;
        let (var_sortability, r2_sortability) = self.sortability();

        let (estimated_graph, runtime_secs, crash_reason) =
            match fit_timed(self.algorithm.as_mut(), &self.data) {
                Ok(fit) => (fit.graph, fit.runtime.as_secs_f64(), None),
                Err(e) => {
                    tracing::warn!(
                        replicate,
                        algorithm = self.algorithm.name(),
                        error = %e.tagged_string(),
                        "algorithm crashed, substituting empty graph"
                    );
                    (self.true_graph.zeros_like(), 0.0, Some(e.to_string()))
                }
            };

        let extensions = consistent_extensions(&estimated_graph);
        let average = match average_extension(&extensions) {
            Ok(avg) => Some(avg),
            Err(e) => {
                tracing::debug!(replicate, reason = %e, "no consistent extensions");
                None
            }
        };
        tracing::debug!(
            replicate,
            fit_runtime_secs = runtime_secs,
            extension_count = extensions.len(),
            "task finished"
        );

        CompletedTask {
            replicate,
            estimated_graph,
            runtime_secs,
            crash_reason,
            extensions,
            average_extension: average,
            var_sortability,
            r2_sortability,
        }
    }

    /// Both scores of the pooled data, each falling back to 0 on failure.
    fn sortability(&self) -> (f64, f64) {
        let replicate = self.replicate;
        let pooled = match pool(&self.data) {
            Ok(pooled) => pooled,
            Err(e) => {
                tracing::debug!(replicate, error = %e, "cannot pool data for sortability");
                return (0.0, 0.0);
            }
        };
        let var = var_sortability(&pooled, &self.true_graph).unwrap_or_else(|e| {
            tracing::debug!(replicate, error = %e, "variance sortability failed");
            0.0
        });
        let r2 = r2_sortability(&pooled, &self.true_graph).unwrap_or_else(|e| {
            tracing::debug!(replicate, error = %e, "R2 sortability failed");
            0.0
        });
        (var, r2)
    }
}

/// Read-only outcome of a finished `CausalInferenceTask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedTask {
    replicate: usize,
    estimated_graph: AdjacencyMatrix,
    runtime_secs: f64,
    crash_reason: Option<String>,
    extensions: Vec<AdjacencyMatrix>,
    average_extension: Option<AdjacencyMatrix>,
    var_sortability: f64,
    r2_sortability: f64,
}

impl CompletedTask {
    pub fn replicate(&self) -> usize {
        self.replicate
    }

    /// The fitted graph, or an all-zero graph when the algorithm crashed.
    pub fn estimated_graph(&self) -> &AdjacencyMatrix {
        &self.estimated_graph
    }

    /// Fit time in seconds. 0 when the algorithm crashed.
    pub fn runtime_secs(&self) -> f64 {
        self.runtime_secs
    }

    pub fn algorithm_crashed(&self) -> bool {
        self.crash_reason.is_some()
    }

    pub fn crash_reason(&self) -> Option<&str> {
        self.crash_reason.as_deref()
    }

    pub fn extensions(&self) -> &[AdjacencyMatrix] {
        &self.extensions
    }

    /// Mean of all consistent extensions; `None` when there are none.
    pub fn average_extension(&self) -> Option<&AdjacencyMatrix> {
        self.average_extension.as_ref()
    }

    pub fn no_consistent_extensions(&self) -> bool {
        self.average_extension.is_none()
    }

    pub fn var_sortability(&self) -> f64 {
        self.var_sortability
    }

    pub fn r2_sortability(&self) -> f64 {
        self.r2_sortability
    }
}
