//! Tracing subscriber setup for the CLI

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber.
///
/// Rewrite notices from the sync engine are emitted at info level, so the
/// subscriber is installed unconditionally with an "info" default;
/// `--verbose` lowers the default to "debug". The `RUST_LOG` environment
/// variable overrides both.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .compact();

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore a second init in tests.
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
