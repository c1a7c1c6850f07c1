//! Tracing subscriber installation for binaries.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! job of the process entry point.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::ParseError, fmt, prelude::*, util::TryInitError};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The fallback filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Installs a formatted subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence; `default_directive` applies when it is unset
/// or unparsable. Stdout stays free for command output.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the directive is invalid or a subscriber
/// is already installed.
pub fn init(default_directive: &str) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_directive))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
