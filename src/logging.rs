//! Diagnostic logging for the binary.
//!
//! Logs go to stderr so they never mix with the rendered box on stdout.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter directives are read from this variable first, then `RUST_LOG`.
pub const LOG_VAR: &str = "BOXEN_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Builds the log filter. `verbose` forces `debug` regardless of the
/// environment.
fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install logger: {err}"))
}
