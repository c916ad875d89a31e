//! Logging initialization for the binary
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the executable. Logs always go to stderr so stdout stays parseable.

use crate::error::{ExportsError, Result};
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level for a `-v` count: 0 = INFO, 1 = DEBUG, 2+ = TRACE, WARN when quiet
pub fn level_for(verbosity: u8, quiet: bool) -> Level {
    match (quiet, verbosity) {
        (true, 0) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` is respected; the verbosity flags raise this crate's level on
/// top of it. With `json` every event is one JSON object per line.
pub fn init(verbosity: u8, quiet: bool, json: bool) -> Result<()> {
    let level = level_for(verbosity, quiet);

    let crate_directive: Directive = format!("cjs_exports={}", level)
        .parse()
        .map_err(|e| ExportsError::config_error(format!("invalid log directive: {}", e)))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"))
        .add_directive(crate_directive);

    let subscriber = tracing_subscriber::registry().with(filter);

    let installed = if json {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        subscriber
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };

    installed.map_err(|e| ExportsError::config_error(format!("failed to install logger: {}", e)))
}
