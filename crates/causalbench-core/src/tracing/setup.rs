//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "CAUSALBENCH_LOG";

/// Filter used when `CAUSALBENCH_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "causalbench=info";

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads `CAUSALBENCH_LOG` for per-crate log levels, e.g.
/// `CAUSALBENCH_LOG=causalbench_compute=debug,causalbench_core=warn`.
///
/// Idempotent. A subscriber installed elsewhere first is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
