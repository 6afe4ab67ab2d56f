//! causalbench-compute: the resampling and aggregation engine.
//!
//! - Algorithm: `CausalAlgorithm` adapters, typed configs, `fit_timed`
//! - Extensions: DAG orientations of partially directed graphs
//! - Sortability: variance and R² sortability diagnostics
//! - Task: one replicate, crash-contained
//! - Bootstrap: replicated runs, worker pool, aggregation
//! - Comparison: bootstraps over growing variable sets
//! - Scoring: edge classes against the true graph
//! - Persist: JSON snapshots

pub mod algorithm;
pub mod bootstrap;
pub mod comparison;
pub mod extensions;
pub mod persist;
pub mod scoring;
pub mod sortability;
pub mod task;

pub use algorithm::{AlgorithmConfig, CausalAlgorithm, OracleAlgorithm};
pub use bootstrap::{Bootstrap, BootstrapOptions, BootstrapSummary, Statistic};
pub use comparison::BootstrapComparison;
pub use task::{CausalInferenceTask, CompletedTask};
