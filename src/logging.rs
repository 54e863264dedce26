//! Structured logging setup for the `dfpaths` binary.
//!
//! The library itself only emits [`tracing`] events; installing a subscriber is
//! left to the application.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable consulted after `RUST_LOG`
pub const LOG_ENV: &str = "DFPATHS_LOG";

/// Returns the filter directive for the given CLI arguments
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("dfpaths={level}"),
        (true, None) => "dfpaths=debug".to_string(),
        (false, None) => "dfpaths=warn".to_string(),
    }
}

/// Initialize structured logging on stderr based on CLI arguments.
///
/// `RUST_LOG` and then [`LOG_ENV`] override the level derived from the arguments.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .or_else(|_| EnvFilter::try_new(filter_directive(verbose, log_level)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
