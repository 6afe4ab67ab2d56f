//! BenchErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable, machine-readable
/// code next to its human-readable message.
pub trait BenchErrorCode {
    /// Returns the error code string (e.g., "MATRIX_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MATRIX_ERROR: &str = "MATRIX_ERROR";
pub const VARIABLE_ERROR: &str = "VARIABLE_ERROR";
pub const DATA_ERROR: &str = "DATA_ERROR";
pub const INVALID_SAMPLE_SIZE: &str = "INVALID_SAMPLE_SIZE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const ALGORITHM_CRASHED: &str = "ALGORITHM_CRASHED";
pub const ALGORITHM_PRECONDITION: &str = "ALGORITHM_PRECONDITION";
pub const SORTABILITY_ERROR: &str = "SORTABILITY_ERROR";
pub const EXTENSION_ERROR: &str = "EXTENSION_ERROR";
pub const TASK_ERROR: &str = "TASK_ERROR";
pub const BOOTSTRAP_CONFIG: &str = "BOOTSTRAP_CONFIG";
pub const AGGREGATION_FAILED: &str = "AGGREGATION_FAILED";
pub const INCOMPLETE_RUN: &str = "INCOMPLETE_RUN";
pub const WORKER_POOL: &str = "WORKER_POOL";
pub const VARIABLE_GROWTH: &str = "VARIABLE_GROWTH";
pub const PERSIST_ERROR: &str = "PERSIST_ERROR";
pub const SNAPSHOT_EXISTS: &str = "SNAPSHOT_EXISTS";
