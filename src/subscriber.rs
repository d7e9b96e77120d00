//! Console subscriber setup for the tracing backend.
//!
//! [`crate::TracingBackend`] emits events into whatever subscriber the
//! host application installed. Hosts that have not set one up can call
//! [`init`] for a plain console subscriber:
//! - Prints to stdout with ANSI colors
//! - Filter configurable via the RUST_LOG environment variable

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Subscriber setup errors.
#[derive(Debug, Error)]
pub enum SubscriberError {
    /// A global subscriber was already installed
    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Install a console subscriber filtering at `info` unless RUST_LOG says
/// otherwise.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed; the
/// existing subscriber stays in place.
pub fn init() -> Result<(), SubscriberError> {
    init_with_filter("info")
}

/// Install a console subscriber with an explicit default filter.
///
/// RUST_LOG still takes precedence over `default_filter` when set.
pub fn init_with_filter(default_filter: &str) -> Result<(), SubscriberError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .try_init()?;

    Ok(())
}
