//! In-memory capturing backend.

use crate::backend::Backend;
use crate::config::LevelConfig;
use crate::record::LogRecord;
use crate::severity::Severity;
use std::sync::{Mutex, PoisonError};

/// Backend that keeps every appended record in memory.
///
/// Useful for:
/// - Tests asserting on what the facade produced
/// - Embedders that inspect or re-route output themselves
///
/// Records are stored in append order. The buffer grows without bound;
/// callers that keep one alive long-term should [`clear`](Self::clear) it.
///
/// # Example
///
/// ```
/// use logbridge::{Backend, LevelConfig, LogRecord, MemoryBackend, Severity};
///
/// let backend = MemoryBackend::new(LevelConfig::default());
/// backend.append(LogRecord::new(Severity::Info, "app", "captured"));
/// assert_eq!(backend.records()[0].message(), "captured");
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    config: LevelConfig,
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryBackend {
    /// Create a capturing backend with the given level configuration.
    pub fn new(config: LevelConfig) -> Self {
        Self {
            config,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the captured records, in append order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Number of captured records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all captured records.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogRecord>> {
        // A poisoned lock still holds an intact buffer.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Backend for MemoryBackend {
    fn append(&self, record: LogRecord) {
        self.lock().push(record);
    }

    fn is_enabled(&self, logger: &str, severity: Severity) -> bool {
        self.config.enables(logger, severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemoryBackend>();
    }

    #[test]
    fn test_captures_in_append_order() {
        let backend = MemoryBackend::new(LevelConfig::default());
        backend.append(LogRecord::new(Severity::Info, "app", "first"));
        backend.append(LogRecord::new(Severity::Warn, "app", "second"));

        let records = backend.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message(), "first");
        assert_eq!(records[1].message(), "second");
    }

    #[test]
    fn test_clear_empties_the_buffer() {
        let backend = MemoryBackend::new(LevelConfig::default());
        backend.append(LogRecord::new(Severity::Info, "app", "gone"));
        assert!(!backend.is_empty());

        backend.clear();
        assert!(backend.is_empty());
        assert_eq!(backend.len(), 0);
    }

    #[test]
    fn test_enablement_follows_config() {
        let backend = MemoryBackend::new(
            LevelConfig::default().with_threshold("quiet", Severity::Error),
        );

        assert!(!backend.is_enabled("quiet", Severity::Warn));
        assert!(backend.is_enabled("quiet", Severity::Error));
        assert!(backend.is_enabled("loud", Severity::Info));
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let backend = Arc::new(MemoryBackend::new(LevelConfig::default()));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let backend = Arc::clone(&backend);
                std::thread::spawn(move || {
                    backend.append(LogRecord::new(Severity::Info, "app", format!("msg {i}")));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(backend.len(), 4);
    }
}
