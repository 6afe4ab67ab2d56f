//! Names of the bootstrap summary scalars.
//!
//! Summary rows use these strings as column keys, and aggregation failures
//! name the statistic with them, so log lines and exported tables line up.

/// Mean algorithm fit time in seconds.
pub const AVG_RUNTIME_SECS: &str = "avg_runtime_secs";

/// Mean variance-sortability of the resampled datasets.
pub const VAR_SORTABILITY: &str = "var_sortability";

/// Mean R²-sortability of the resampled datasets.
pub const R2_SORTABILITY: &str = "r2_sortability";

/// Share of replicates whose algorithm crashed.
pub const CRASH_RATE: &str = "crash_rate";

/// Share of replicates without a consistent extension.
pub const NO_EXTENSION_RATE: &str = "no_extension_rate";

/// Every summary scalar, in export column order.
pub const SUMMARY_SCALARS: [&str; 5] = [
    AVG_RUNTIME_SECS,
    CRASH_RATE,
    NO_EXTENSION_RATE,
    VAR_SORTABILITY,
    R2_SORTABILITY,
];
