//! Tracing initialization and configuration.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

/// The error type for telemetry initialization failures.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The `RUST_LOG` directive string could not be parsed.
    #[error("failed to parse log filter: {0}")]
    Filter(#[from] ParseError),
    /// A global subscriber was already installed.
    #[error("failed to initialize tracing: {0}")]
    Init(#[from] TryInitError),
}

/// Initializes the tracing subscriber for structured logging.
///
/// The log level can be configured via the `RUST_LOG` environment variable.
/// If not set, defaults to `info` level.
///
/// ```bash
/// RUST_LOG=debug my-server
/// RUST_LOG=catalog_server=trace,axum=debug my-server
/// ```
///
/// # Errors
///
/// Returns an error if the filter cannot be parsed or a global subscriber
/// is already installed.
pub fn init_tracing() -> Result<(), TelemetryError> {
    let env_filter = create_env_filter()?;
    let fmt_layer = create_fmt_layer();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

/// Creates an environment filter for tracing.
fn create_env_filter() -> Result<EnvFilter, ParseError> {
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))
}

/// Creates a formatted tracing layer.
fn create_fmt_layer() -> fmt::Layer<tracing_subscriber::Registry> {
    fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(true)
}
