//! Tracing setup for the command-line front end
//!
//! Library code only emits events; installing a subscriber is left to the
//! binary. Output goes to stderr so it never mixes with command output.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `warn`, or at
/// `debug` when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("finance_tracker={}", default_level)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
