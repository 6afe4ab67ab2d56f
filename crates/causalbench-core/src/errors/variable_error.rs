//! Variable-set errors.

use super::error_code::{self, BenchErrorCode};

/// Errors from comparing ordered variable lists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VariableError {
    #[error("Duplicate variables in list: {0:?}")]
    Duplicates(Vec<String>),

    #[error("Neither variable list contains the other: {first:?} vs {second:?}")]
    Incomparable {
        first: Vec<String>,
        second: Vec<String>,
    },
}

impl BenchErrorCode for VariableError {
    fn error_code(&self) -> &'static str {
        error_code::VARIABLE_ERROR
    }
}
