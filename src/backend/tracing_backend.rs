//! Tracing library backend implementation.

use crate::backend::Backend;
use crate::config::LevelConfig;
use crate::record::LogRecord;
use crate::severity::Severity;

/// Backend that emits one `tracing` event per record.
///
/// This is the production end of the bridge: records arriving through the
/// legacy facade become ordinary `tracing` events, with the logger name,
/// caller path, and context attached as fields. Whatever subscriber the
/// host application installed (see [`crate::subscriber`]) formats and
/// routes them from there.
///
/// # Example
///
/// ```ignore
/// use logbridge::{LevelConfig, Severity, TracingBackend};
///
/// // Assumes a tracing subscriber is already installed.
/// let backend = TracingBackend::new(
///     LevelConfig::default().with_threshold("app", Severity::Debug),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TracingBackend {
    config: LevelConfig,
}

impl TracingBackend {
    /// Create a tracing backend with the given level configuration.
    pub fn new(config: LevelConfig) -> Self {
        Self { config }
    }

    /// The level configuration this backend filters with.
    pub fn config(&self) -> &LevelConfig {
        &self.config
    }
}

impl Backend for TracingBackend {
    fn append(&self, record: LogRecord) {
        let message = record.message();
        let logger = record.logger();
        let caller = record.caller().unwrap_or_default();
        match record.severity() {
            Severity::Trace => {
                tracing::trace!(logger, caller, context = ?record.context(), "{message}")
            }
            Severity::Debug => {
                tracing::debug!(logger, caller, context = ?record.context(), "{message}")
            }
            Severity::Info => {
                tracing::info!(logger, caller, context = ?record.context(), "{message}")
            }
            Severity::Warn => {
                tracing::warn!(logger, caller, context = ?record.context(), "{message}")
            }
            Severity::Error => {
                tracing::error!(logger, caller, context = ?record.context(), "{message}")
            }
        }
    }

    fn is_enabled(&self, logger: &str, severity: Severity) -> bool {
        self.config.enables(logger, severity)
    }
}
