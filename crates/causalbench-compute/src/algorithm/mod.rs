//! Algorithm adapters: the `CausalAlgorithm` contract, typed configs, the
//! timed fit wrapper and the oracle baseline.

pub mod config;
pub mod oracle;
pub mod traits;

pub use config::AlgorithmConfig;
pub use oracle::OracleAlgorithm;
pub use traits::{fit_timed, CausalAlgorithm, TimedFit};
