//! Top-level error aggregating every subsystem.

use super::error_code::BenchErrorCode;
use super::{
    BootstrapError, ComparisonError, ConfigError, DataError, MatrixError, PersistError,
    TaskError, VariableError,
};

/// Errors surfaced to a benchmark driver.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Variable error: {0}")]
    Variables(#[from] VariableError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Task error: {0}")]
    Task(#[from] TaskError),

    #[error("Bootstrap error: {0}")]
    Bootstrap(#[from] BootstrapError),

    #[error("Comparison error: {0}")]
    Comparison(#[from] ComparisonError),

    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),
}

impl BenchErrorCode for BenchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Matrix(e) => e.error_code(),
            Self::Variables(e) => e.error_code(),
            Self::Data(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Task(e) => e.error_code(),
            Self::Bootstrap(e) => e.error_code(),
            Self::Comparison(e) => e.error_code(),
            Self::Persist(e) => e.error_code(),
        }
    }
}
