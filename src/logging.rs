//! Logging configuration for sql-drill.
//!
//! The engine itself only emits `tracing` events; hosts decide where
//! they go. This module provides a stderr initializer for simple hosts
//! and test harnesses.

use tracing_subscriber::EnvFilter;

/// Initializes logging to stderr, honoring `RUST_LOG` and defaulting
/// to `info`.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
