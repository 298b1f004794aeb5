//! Tracing subscriber setup for binaries.

use tracing_subscriber::EnvFilter;

/// Installs a compact stdout subscriber filtered by `RUST_LOG`.
///
/// Call once at startup; library code only emits spans and events.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
