//! Error handling for the benchmark.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod algorithm_error;
pub mod bench_error;
pub mod bootstrap_error;
pub mod comparison_error;
pub mod config_error;
pub mod data_error;
pub mod error_code;
pub mod matrix_error;
pub mod persist_error;
pub mod sortability_error;
pub mod task_error;
pub mod variable_error;

pub use algorithm_error::AlgorithmError;
pub use bench_error::BenchError;
pub use bootstrap_error::{AggregationError, BootstrapError};
pub use comparison_error::ComparisonError;
pub use config_error::ConfigError;
pub use data_error::DataError;
pub use error_code::BenchErrorCode;
pub use matrix_error::MatrixError;
pub use persist_error::PersistError;
pub use sortability_error::{ExtensionError, SortabilityError};
pub use task_error::TaskError;
pub use variable_error::VariableError;
