//! Bootstrap comparison errors.

use super::error_code::{self, BenchErrorCode};
use super::{BootstrapError, VariableError};

/// Errors raised when a comparison's variable-growth invariant is violated
/// or when one of its bootstraps fails to run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComparisonError {
    #[error(
        "Only addition of variables is allowed from one bootstrap to the next: \
         {added} drops {removed:?}"
    )]
    VariablesRemoved { added: String, removed: Vec<String> },

    #[error(
        "Variables must keep their order from one bootstrap to the next: \
         {previous:?} vs {new:?}"
    )]
    OrderChanged {
        previous: Vec<String>,
        new: Vec<String>,
    },

    #[error("Bootstrap {name} has no averaged graph; run it first")]
    MissingAverage { name: String },

    #[error("Matrix error: {0}")]
    Matrix(#[from] super::MatrixError),

    #[error("Variable error: {0}")]
    Variables(#[from] VariableError),

    #[error("Bootstrap {name} failed: {source}")]
    Bootstrap {
        name: String,
        source: BootstrapError,
    },
}

impl BenchErrorCode for ComparisonError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Variables(e) => e.error_code(),
            Self::Bootstrap { source, .. } => source.error_code(),
            Self::Matrix(e) => e.error_code(),
            Self::MissingAverage { .. } => error_code::AGGREGATION_FAILED,
            _ => error_code::VARIABLE_GROWTH,
        }
    }
}
