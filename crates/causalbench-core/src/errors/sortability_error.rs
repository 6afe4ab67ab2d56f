//! Sortability and consistent-extension errors.

use super::error_code::{self, BenchErrorCode};

/// Failures computing a sortability score. Diagnostic only: the caller
/// records a score of 0 instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SortabilityError {
    #[error("True graph has no directed paths")]
    NoPaths,

    #[error("Column {column} has zero variance")]
    ZeroVariance { column: String },

    #[error("Score for column {column} is not finite")]
    NonFiniteScore { column: String },

    #[error("Need at least {needed} observations, got {got}")]
    TooFewObservations { needed: usize, got: usize },

    #[error("Data columns {data:?} do not match graph variables {graph:?}")]
    VariableMismatch {
        data: Vec<String>,
        graph: Vec<String>,
    },
}

impl BenchErrorCode for SortabilityError {
    fn error_code(&self) -> &'static str {
        error_code::SORTABILITY_ERROR
    }
}

/// Failures while orienting a partially directed graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtensionError {
    #[error("Cannot average an empty list of extensions")]
    NoExtensions,

    #[error("Matrix error: {0}")]
    Matrix(#[from] super::MatrixError),
}

impl BenchErrorCode for ExtensionError {
    fn error_code(&self) -> &'static str {
        error_code::EXTENSION_ERROR
    }
}
