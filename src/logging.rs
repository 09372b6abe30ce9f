//! Diagnostic logging for the validator binaries.
//!
//! Diagnostics go to stderr through `tracing`; the report itself stays on
//! stdout. The default filter is `warn`, so a normal run prints nothing extra.
//! Set `RUST_LOG=registry_validator=debug` to see skipped categories and
//! per-entry checks.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
