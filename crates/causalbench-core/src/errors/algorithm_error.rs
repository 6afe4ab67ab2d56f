//! Algorithm adapter errors.
//!
//! Everything here is recoverable per replicate: a task that receives one of
//! these records a crash and keeps going.

use super::error_code::{self, BenchErrorCode};

/// Failures raised by a causal discovery adapter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlgorithmError {
    #[error("Input frames disagree on columns: {0}")]
    Precondition(String),

    #[error("{algorithm} did not converge: {message}")]
    NonConvergence { algorithm: String, message: String },

    #[error("{algorithm} constraints are unsatisfiable: {message}")]
    Unsatisfiable { algorithm: String, message: String },

    #[error("{algorithm} returned variables {found:?}, expected {expected:?}")]
    OutputMismatch {
        algorithm: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("{algorithm} panicked: {message}")]
    Panicked { algorithm: String, message: String },

    #[error("{algorithm} failed: {message}")]
    Internal { algorithm: String, message: String },
}

impl BenchErrorCode for AlgorithmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Precondition(_) => error_code::ALGORITHM_PRECONDITION,
            _ => error_code::ALGORITHM_CRASHED,
        }
    }
}
