//! Observability for the benchmark.
//! `tracing` crate with `EnvFilter`, per-crate log levels, plus the
//! summary scalar names shared by logs and exports.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;
