//! Logging initialization for the CLI.
//!
//! Diagnostics go to stderr; stdout is reserved for the detected manager
//! and for output of wrapped commands.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level for this crate's events.
///
/// `quiet` wins over `verbosity`: 0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE.
pub fn level(verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::WARN;
    }
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` replaces the verbosity flags.
///
/// # Panics
/// Panics if a subscriber is already installed.
pub fn init(verbosity: u8, quiet: bool) {
    let level = level(verbosity, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pmdetect={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
