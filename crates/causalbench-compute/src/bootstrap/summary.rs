//! Aggregation of completed replicates into bootstrap-level statistics.
//!
//! Each statistic is computed on its own. A failure is logged and stored as
//! `Statistic::Failed`; it never stops the sibling statistics.

use serde::{Deserialize, Serialize};

use causalbench_core::errors::AggregationError;
use causalbench_core::tracing::metrics;
use causalbench_core::AdjacencyMatrix;

use super::Statistic;
use crate::task::CompletedTask;

/// Name of the averaged-extension statistic in diagnostics.
pub const AVG_AVG_EXTENSION: &str = "avg_avg_extension";

/// Bootstrap-level statistics over all replicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapSummary {
    /// Mean over replicates of each replicate's mean consistent extension.
    /// Replicates without extensions are left out; all-zero when every
    /// replicate lacks extensions.
    pub avg_avg_extension: Statistic<AdjacencyMatrix>,
    pub avg_runtime_secs: Statistic<f64>,
    pub crash_rate: Statistic<f64>,
    pub no_extension_rate: Statistic<f64>,
    pub avg_var_sortability: Statistic<f64>,
    pub avg_r2_sortability: Statistic<f64>,
}

impl BootstrapSummary {
    /// Aggregate `tasks` of the bootstrap `name` over `true_graph`'s variables.
    pub fn aggregate(name: &str, tasks: &[CompletedTask], true_graph: &AdjacencyMatrix) -> Self {
        Self {
            avg_avg_extension: guarded(name, AVG_AVG_EXTENSION, average_extensions(tasks, true_graph)),
            avg_runtime_secs: guarded(
                name,
                metrics::AVG_RUNTIME_SECS,
                mean(metrics::AVG_RUNTIME_SECS, tasks.iter().map(CompletedTask::runtime_secs)),
            ),
            crash_rate: guarded(
                name,
                metrics::CRASH_RATE,
                mean(metrics::CRASH_RATE, tasks.iter().map(|t| indicator(t.algorithm_crashed()))),
            ),
            no_extension_rate: guarded(
                name,
                metrics::NO_EXTENSION_RATE,
                mean(
                    metrics::NO_EXTENSION_RATE,
                    tasks.iter().map(|t| indicator(t.no_consistent_extensions())),
                ),
            ),
            avg_var_sortability: guarded(
                name,
                metrics::VAR_SORTABILITY,
                mean(metrics::VAR_SORTABILITY, tasks.iter().map(CompletedTask::var_sortability)),
            ),
            avg_r2_sortability: guarded(
                name,
                metrics::R2_SORTABILITY,
                mean(metrics::R2_SORTABILITY, tasks.iter().map(CompletedTask::r2_sortability)),
            ),
        }
    }

    /// The scalar statistics keyed by their export column names.
    pub fn scalars(&self) -> [(&'static str, &Statistic<f64>); 5] {
        [
            (metrics::AVG_RUNTIME_SECS, &self.avg_runtime_secs),
            (metrics::CRASH_RATE, &self.crash_rate),
            (metrics::NO_EXTENSION_RATE, &self.no_extension_rate),
            (metrics::VAR_SORTABILITY, &self.avg_var_sortability),
            (metrics::R2_SORTABILITY, &self.avg_r2_sortability),
        ]
    }
}

fn guarded<T>(bootstrap: &str, statistic: &'static str, result: Result<T, AggregationError>) -> Statistic<T> {
    match result {
        Ok(value) => Statistic::Computed(value),
        Err(e) => {
            tracing::warn!(bootstrap, statistic, error = %e, "aggregate statistic failed");
            Statistic::Failed {
                reason: e.to_string(),
            }
        }
    }
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

fn mean(statistic: &'static str, values: impl Iterator<Item = f64>) -> Result<f64, AggregationError> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        return Err(AggregationError::Empty { statistic });
    }
    let value = sum / count as f64;
    if !value.is_finite() {
        return Err(AggregationError::NonFinite { statistic, value });
    }
    Ok(value)
}

fn average_extensions(
    tasks: &[CompletedTask],
    true_graph: &AdjacencyMatrix,
) -> Result<AdjacencyMatrix, AggregationError> {
    if tasks.is_empty() {
        return Err(AggregationError::Empty {
            statistic: AVG_AVG_EXTENSION,
        });
    }
    let averages: Vec<&AdjacencyMatrix> = tasks.iter().filter_map(CompletedTask::average_extension).collect();
    if averages.is_empty() {
        return Ok(true_graph.zeros_like());
    }
    AdjacencyMatrix::mean_of(&averages).map_err(|source| AggregationError::Matrix {
        statistic: AVG_AVG_EXTENSION,
        source,
    })
}
