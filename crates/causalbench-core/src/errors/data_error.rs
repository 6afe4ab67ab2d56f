//! Tabular data errors.

use super::error_code::{self, BenchErrorCode};

/// Errors from frame construction, pooling and resampling.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("No frames were passed")]
    NoFrames,

    #[error("Duplicate column names: {0:?}")]
    DuplicateColumns(Vec<String>),

    #[error("Row {row} has {width} values, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },

    #[error("Non-finite value at row {row}, column {column}")]
    NonFinite { row: usize, column: String },

    #[error("Frame {index} has columns {found:?}, expected {expected:?}")]
    ColumnMismatch {
        index: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Cannot draw rows from empty frame {index}")]
    EmptyFrame { index: usize },

    #[error("Invalid sample size {value}: must be a fraction in (0, 1] or a count > 1")]
    InvalidSampleSize { value: String },

    #[error("{sizes} sample sizes given for {frames} frames")]
    SampleSizeCountMismatch { sizes: usize, frames: usize },
}

impl BenchErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSampleSize { .. } => error_code::INVALID_SAMPLE_SIZE,
            _ => error_code::DATA_ERROR,
        }
    }
}
