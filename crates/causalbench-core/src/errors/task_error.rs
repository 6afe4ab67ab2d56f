//! Causal inference task errors.

use super::error_code::{self, BenchErrorCode};
use super::DataError;

/// Precondition failures when constructing a task. Once constructed, a task
/// never fails: algorithm crashes and missing extensions are recorded instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaskError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Data columns {data:?} do not match true graph variables {graph:?}")]
    VariableMismatch {
        data: Vec<String>,
        graph: Vec<String>,
    },
}

impl BenchErrorCode for TaskError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Data(e) => e.error_code(),
            Self::VariableMismatch { .. } => error_code::TASK_ERROR,
        }
    }
}
