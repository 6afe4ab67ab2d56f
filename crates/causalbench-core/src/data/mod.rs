//! Tabular observation frames, pooling, standardization and resampling.

pub mod frame;
pub mod sampling;

pub use frame::{enforce_columns, pool, same_columns, standardize_all, Frame};
pub use sampling::{bootstrap_sample, replicate_seed, SampleSize};
