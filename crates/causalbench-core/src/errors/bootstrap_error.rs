//! Bootstrap errors.

use super::error_code::{self, BenchErrorCode};
use super::{DataError, MatrixError, TaskError};

/// Errors raised by `Bootstrap` construction and execution.
///
/// Configuration variants surface before any replicate runs. `IncompleteRun`
/// and `WorkerPool` are internal-consistency failures and are never tolerated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BootstrapError {
    #[error("No data passed to bootstrap {name}")]
    NoData { name: String },

    #[error("Variables differ between frames and true graph in bootstrap {name}: {message}")]
    VariableMismatch { name: String, message: String },

    #[error("{sizes} sample sizes given for {frames} frames")]
    SampleSizeCountMismatch { sizes: usize, frames: usize },

    #[error("Invalid sample size for frame {index}: {message}")]
    InvalidSampleSize { index: usize, message: String },

    #[error("Algorithm config rejected in bootstrap {name}: {message}")]
    InvalidAlgorithmConfig { name: String, message: String },

    #[error("nr_bootstraps must be at least 1, got {0}")]
    TooFewReplicates(usize),

    #[error("Bootstrap {name}: {completed} of {expected} replicates completed")]
    IncompleteRun {
        name: String,
        expected: usize,
        completed: usize,
    },

    #[error("Worker pool failed: {0}")]
    WorkerPool(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Task error: {0}")]
    Task(#[from] TaskError),
}

impl BenchErrorCode for BootstrapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::IncompleteRun { .. } => error_code::INCOMPLETE_RUN,
            Self::WorkerPool(_) => error_code::WORKER_POOL,
            Self::Data(e) => e.error_code(),
            Self::Matrix(e) => e.error_code(),
            Self::Task(e) => e.error_code(),
            _ => error_code::BOOTSTRAP_CONFIG,
        }
    }
}

/// A single aggregate statistic could not be computed. Converted into a
/// failed statistic; sibling statistics are unaffected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregationError {
    #[error("No values to aggregate for {statistic}")]
    Empty { statistic: &'static str },

    #[error("{statistic} is not finite: {value}")]
    NonFinite { statistic: &'static str, value: f64 },

    #[error("Matrix error in {statistic}: {source}")]
    Matrix {
        statistic: &'static str,
        source: MatrixError,
    },
}

impl BenchErrorCode for AggregationError {
    fn error_code(&self) -> &'static str {
        error_code::AGGREGATION_FAILED
    }
}
