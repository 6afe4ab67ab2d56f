//! causalbench-core: foundations of the causal discovery benchmark.
//!
//! - Errors: one `thiserror` enum per subsystem plus `BenchError`
//! - Config: layered TOML configuration (`BenchConfig`)
//! - Tracing: `init_tracing` and shared field names
//! - Types: ordered variable-set algebra
//! - Matrix: labeled `AdjacencyMatrix` and its sub/superset operations
//! - Data: `Frame`s, pooling, standardization and bootstrap resampling

pub mod config;
pub mod data;
pub mod errors;
pub mod matrix;
pub mod tracing;
pub mod types;

pub use config::BenchConfig;
pub use data::{Frame, SampleSize};
pub use errors::BenchErrorCode;
pub use matrix::AdjacencyMatrix;
