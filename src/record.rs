//! Log records handed to the backend.

use crate::severity::Severity;
use std::collections::BTreeMap;
use std::time::SystemTime;

/// Context key under which the original legacy level name is preserved
/// when a custom level is mapped to the backend's default severity.
pub const ORIGINAL_LEVEL_KEY: &str = "original.level";

/// An immutable record of one log call.
///
/// Records are constructed per call by the bridge and moved into
/// [`crate::backend::Backend::append`]; they carry everything the backend
/// needs and nothing the caller can mutate afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    timestamp: SystemTime,
    severity: Severity,
    logger: String,
    message: String,
    caller: Option<&'static str>,
    context: BTreeMap<String, String>,
}

impl LogRecord {
    /// Create a record stamped with the current time.
    pub fn new(severity: Severity, logger: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: SystemTime::now(),
            severity,
            logger: logger.into(),
            message: message.into(),
            caller: None,
            context: BTreeMap::new(),
        }
    }

    /// Attach the originating caller's module path.
    pub fn with_caller(mut self, caller: &'static str) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Attach one context entry.
    pub fn with_context_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// When the record was constructed.
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Mapped backend severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Name of the logger the record was produced through.
    pub fn logger(&self) -> &str {
        &self.logger
    }

    /// The formatted message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Module path of the originating caller, when one was supplied.
    pub fn caller(&self) -> Option<&'static str> {
        self.caller
    }

    /// Key/value context carried alongside the message.
    pub fn context(&self) -> &BTreeMap<String, String> {
        &self.context
    }

    /// The original legacy level name, for records logged at a custom level.
    pub fn original_level(&self) -> Option<&str> {
        self.context.get(ORIGINAL_LEVEL_KEY).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_carries_call_data() {
        let record = LogRecord::new(Severity::Info, "app.startup", "ready");

        assert_eq!(record.severity(), Severity::Info);
        assert_eq!(record.logger(), "app.startup");
        assert_eq!(record.message(), "ready");
        assert_eq!(record.caller(), None);
        assert!(record.context().is_empty());
        assert!(record.timestamp() <= SystemTime::now());
    }

    #[test]
    fn test_record_with_caller() {
        let record = LogRecord::new(Severity::Warn, "app", "careful").with_caller(module_path!());
        assert_eq!(record.caller(), Some(module_path!()));
    }

    #[test]
    fn test_record_with_original_level() {
        let record = LogRecord::new(Severity::Info, "app", "custom")
            .with_context_entry(ORIGINAL_LEVEL_KEY, "DEFCON_1");

        assert_eq!(record.original_level(), Some("DEFCON_1"));
        assert_eq!(
            record.context().get(ORIGINAL_LEVEL_KEY).map(String::as_str),
            Some("DEFCON_1")
        );
    }

    #[test]
    fn test_original_level_absent_by_default() {
        let record = LogRecord::new(Severity::Info, "app", "plain");
        assert_eq!(record.original_level(), None);
    }
}
