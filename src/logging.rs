//! Logging setup for the findplace binary
//!
//! Diagnostics go through `tracing` and are written to stderr, so they never
//! interleave with prompts on stdout. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset
#[must_use]
pub const fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "findplace=warn",
        1 => "findplace=info",
        2 => "findplace=debug",
        _ => "findplace=trace",
    }
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(verbose, "logging initialized");
    }
}
