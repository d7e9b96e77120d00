//! LogBridge - legacy platform logging routed into `tracing`
//!
//! This library presents the call surface of a value-leveled platform
//! logging API (named logger handles, numeric severity levels with named
//! constants and custom user-defined levels) and forwards every call to a
//! structured logging backend. The production backend emits `tracing`
//! events; tests and embedders can substitute capturing or silent backends
//! through the [`backend::Backend`] trait.
//!
//! # High-Level API
//!
//! ```
//! use logbridge::{BridgeRegistry, Level, LevelConfig, MemoryBackend, Severity};
//! use std::sync::Arc;
//!
//! let config = LevelConfig::default().with_threshold("app", Severity::Debug);
//! let backend = Arc::new(MemoryBackend::new(config));
//! let registry = BridgeRegistry::new(backend.clone());
//!
//! let logger = registry.logger("app.startup");
//! logger.info("Service is up");
//! assert!(logger.is_loggable(&Level::FINE));
//! assert_eq!(backend.len(), 1);
//! ```
//!
//! Logger hierarchy and runtime level mutation belong to the backend's own
//! configuration; the corresponding facade mutators always return
//! [`error::BridgeError::Unsupported`].

pub mod backend;
pub mod bridge;
pub mod config;
pub mod error;
pub mod level;
pub mod record;
pub mod severity;
pub mod subscriber;

pub use backend::{Backend, MemoryBackend, NoOpBackend, TracingBackend};
pub use bridge::{BridgeRegistry, Logger, GLOBAL_LOGGER_NAME};
pub use config::LevelConfig;
pub use error::BridgeError;
pub use level::Level;
pub use record::{LogRecord, ORIGINAL_LEVEL_KEY};
pub use severity::Severity;

/// Version of the LogBridge library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty(), "Version should not be empty");
    }
}
