//! Adjacency matrix errors.

use super::error_code::{self, BenchErrorCode};

/// Errors raised when a labeled matrix violates its structural invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("Row labels {rows:?} differ from column labels {cols:?}")]
    LabelMismatch { rows: Vec<String>, cols: Vec<String> },

    #[error("Duplicate variable labels: {labels:?}")]
    DuplicateLabels { labels: Vec<String> },

    #[error("Matrix has {rows} rows, expected {expected}")]
    RowCount { rows: usize, expected: usize },

    #[error("Matrix has {rows} rows and row {row} has {width} entries, expected {expected}")]
    NotSquare {
        rows: usize,
        row: usize,
        width: usize,
        expected: usize,
    },

    #[error("Entry ({row}, {col}) = {value} is outside {range}")]
    EntryOutOfRange {
        row: String,
        col: String,
        value: f64,
        range: &'static str,
    },

    #[error("Variables {variables:?} are not contained in the larger matrix")]
    NotSubMatrix { variables: Vec<String> },

    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    #[error("Cannot average an empty list of matrices")]
    EmptyAverage,
}

impl BenchErrorCode for MatrixError {
    fn error_code(&self) -> &'static str {
        error_code::MATRIX_ERROR
    }
}
