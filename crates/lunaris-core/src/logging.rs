//! Logging setup built on `tracing`.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Reads the filter from `RUST_LOG` when set, otherwise defaults to
/// `info` for everything. Call once at startup; calling it twice
/// panics, like any global subscriber installation.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
