//! Registry of logger handles.
//!
//! One registry owns one backend and caches one handle per dotted name.
//! The registry is an explicit value: construct it where the application
//! wires its logging and share it from there. Nothing here is a process
//! global.

use crate::backend::Backend;
use crate::bridge::Logger;
use dashmap::DashMap;
use std::sync::Arc;

/// Conventional name of the application-wide default logger.
pub const GLOBAL_LOGGER_NAME: &str = "global";

/// Name-keyed cache of [`Logger`] handles over a shared backend.
///
/// Handle creation is first-request-wins under concurrent access: all
/// callers asking for the same name converge on the same `Arc<Logger>`
/// instance, and a handle lives as long as the registry.
pub struct BridgeRegistry {
    backend: Arc<dyn Backend>,
    loggers: DashMap<String, Arc<Logger>>,
}

impl BridgeRegistry {
    /// Create a registry over the given backend.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            loggers: DashMap::new(),
        }
    }

    /// Return the handle for `name`, creating it on first request.
    pub fn logger(&self, name: &str) -> Arc<Logger> {
        if let Some(existing) = self.loggers.get(name) {
            return Arc::clone(existing.value());
        }

        // The entry lock decides the race: losers of the fast path above
        // converge on whichever handle was inserted first.
        let entry = self.loggers.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(logger = name, "Created bridge logger");
            Arc::new(Logger::new(name, Arc::clone(&self.backend)))
        });
        Arc::clone(entry.value())
    }

    /// Return the conventional global logger.
    pub fn global(&self) -> Arc<Logger> {
        self.logger(GLOBAL_LOGGER_NAME)
    }

    /// Number of handles created so far.
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    /// True if no handle has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl std::fmt::Debug for BridgeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeRegistry")
            .field("loggers", &self.loggers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MemoryBackend, NoOpBackend};
    use crate::config::LevelConfig;

    #[test]
    fn test_same_name_yields_same_handle() {
        let registry = BridgeRegistry::new(Arc::new(NoOpBackend));

        let first = registry.logger("app.io");
        let second = registry.logger("app.io");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_names_yield_distinct_handles() {
        let registry = BridgeRegistry::new(Arc::new(NoOpBackend));

        let a = registry.logger("app.io");
        let b = registry.logger("app.net");

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_handle_keeps_requested_name() {
        let registry = BridgeRegistry::new(Arc::new(NoOpBackend));
        assert_eq!(registry.logger("Test").name(), "Test");
    }

    #[test]
    fn test_global_logger() {
        let registry = BridgeRegistry::new(Arc::new(NoOpBackend));
        let global = registry.global();

        assert_eq!(global.name(), GLOBAL_LOGGER_NAME);
        assert!(Arc::ptr_eq(&global, &registry.logger(GLOBAL_LOGGER_NAME)));
    }

    #[test]
    fn test_handles_share_one_backend() {
        let backend = Arc::new(MemoryBackend::new(LevelConfig::default()));
        let registry = BridgeRegistry::new(backend.clone() as Arc<dyn Backend>);

        registry.logger("first").info("one");
        registry.logger("second").info("two");

        assert_eq!(backend.len(), 2);
    }

    #[test]
    fn test_concurrent_requests_converge() {
        let registry = Arc::new(BridgeRegistry::new(Arc::new(NoOpBackend)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.logger("contended.name"))
            })
            .collect();

        let loggers: Vec<Arc<Logger>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        for logger in &loggers[1..] {
            assert!(Arc::ptr_eq(&loggers[0], logger));
        }
        assert_eq!(registry.len(), 1);
    }
}
