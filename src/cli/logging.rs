//! Diagnostic logging setup

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber
///
/// - Respects `RUST_LOG` if set
/// - Falls back to `warn`, or `debug` with `--verbose`
/// - Writes to stderr so stdout stays clean for command output
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
