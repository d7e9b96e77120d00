//! No-operation backend implementation.

use crate::backend::Backend;
use crate::record::LogRecord;
use crate::severity::Severity;

/// A backend that reports every level as disabled and discards records.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
/// - Silent operation modes
///
/// # Example
///
/// ```
/// use logbridge::{BridgeRegistry, NoOpBackend};
/// use std::sync::Arc;
///
/// let registry = BridgeRegistry::new(Arc::new(NoOpBackend));
/// registry.logger("app").info("This message is discarded");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpBackend;

impl Backend for NoOpBackend {
    #[inline]
    fn append(&self, _record: LogRecord) {
        // Intentionally empty - discard all records
    }

    #[inline]
    fn is_enabled(&self, _logger: &str, _severity: Severity) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_backend_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpBackend>();
    }

    #[test]
    fn test_nothing_is_enabled() {
        for severity in Severity::ASCENDING {
            assert!(!NoOpBackend.is_enabled("app", severity));
        }
    }

    #[test]
    fn test_append_as_trait_object() {
        let backend: Box<dyn Backend> = Box::new(NoOpBackend);
        backend.append(LogRecord::new(Severity::Error, "app", "dropped"));
    }
}
