//! Configuration system for the benchmark.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod bench_config;
pub mod bootstrap_config;
pub mod output_config;

pub use bench_config::{BenchConfig, ConfigOverrides};
pub use bootstrap_config::BootstrapConfig;
pub use output_config::OutputConfig;
