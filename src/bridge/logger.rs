//! Logger handle returned by the registry.

use crate::backend::Backend;
use crate::error::BridgeError;
use crate::level::Level;
use crate::record::{LogRecord, ORIGINAL_LEVEL_KEY};
use crate::severity::Severity;
use std::fmt;
use std::sync::Arc;

/// A named handle on the legacy logging surface.
///
/// Handles are created by [`crate::BridgeRegistry::logger`] and shared as
/// `Arc<Logger>`; they hold no mutable state of their own. Every log call
/// maps the legacy level onto the backend scale, consults the backend's
/// enablement check, and hands over an immutable [`LogRecord`].
///
/// For caller attribution use the [`log_severe!`](crate::log_severe) family
/// of macros, which pass the calling module's path explicitly; the plain
/// methods leave the caller unset.
pub struct Logger {
    name: String,
    backend: Arc<dyn Backend>,
}

impl Logger {
    pub(crate) fn new(name: impl Into<String>, backend: Arc<dyn Backend>) -> Self {
        Self {
            name: name.into(),
            backend,
        }
    }

    /// The dotted name this handle was requested under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a message at `level` would be emitted.
    ///
    /// Delegates to the backend's enablement check on the mapped severity.
    pub fn is_loggable(&self, level: &Level) -> bool {
        self.backend
            .is_enabled(&self.name, Severity::from_level(level))
    }

    /// Log a message at the given legacy level.
    pub fn log(&self, level: &Level, message: &str) {
        self.append(level, None, message);
    }

    /// Log with an explicit caller context.
    ///
    /// This is the expansion target of the `log_*!` macros, which supply
    /// `module_path!()` of the call site as `caller`.
    pub fn log_with_caller(&self, level: &Level, caller: &'static str, args: fmt::Arguments<'_>) {
        self.append(level, Some(caller), args);
    }

    /// Log a message at `SEVERE`.
    pub fn severe(&self, message: &str) {
        self.log(&Level::SEVERE, message);
    }

    /// Log a message at `WARNING`.
    pub fn warning(&self, message: &str) {
        self.log(&Level::WARNING, message);
    }

    /// Log a message at `INFO`.
    pub fn info(&self, message: &str) {
        self.log(&Level::INFO, message);
    }

    /// Log a message at `CONFIG`.
    pub fn config(&self, message: &str) {
        self.log(&Level::CONFIG, message);
    }

    /// Log a message at `FINE`.
    pub fn fine(&self, message: &str) {
        self.log(&Level::FINE, message);
    }

    /// Log a message at `FINER`.
    pub fn finer(&self, message: &str) {
        self.log(&Level::FINER, message);
    }

    /// Log a message at `FINEST`.
    pub fn finest(&self, message: &str) {
        self.log(&Level::FINEST, message);
    }

    /// The effective legacy level of this logger.
    ///
    /// Derived from the backend's enablement: the lowest enabled severity,
    /// reverse-mapped onto the legacy scale. [`Level::OFF`] when the
    /// backend enables nothing for this name.
    pub fn level(&self) -> Level {
        for severity in Severity::ASCENDING {
            if self.backend.is_enabled(&self.name, severity) {
                return severity.to_level();
            }
        }
        Level::OFF
    }

    /// Always fails: the bridge exposes no logger hierarchy.
    pub fn parent(&self) -> Result<Arc<Logger>, BridgeError> {
        Err(BridgeError::Unsupported {
            operation: "parent",
        })
    }

    /// Always fails: the backend owns the logger hierarchy.
    pub fn set_parent(&self, _parent: &Logger) -> Result<(), BridgeError> {
        Err(BridgeError::Unsupported {
            operation: "set_parent",
        })
    }

    /// Always fails: the backend owns level configuration.
    pub fn set_level(&self, _level: &Level) -> Result<(), BridgeError> {
        Err(BridgeError::Unsupported {
            operation: "set_level",
        })
    }

    fn append(&self, level: &Level, caller: Option<&'static str>, message: impl fmt::Display) {
        let severity = Severity::from_level(level);
        if !self.backend.is_enabled(&self.name, severity) {
            return;
        }

        let mut record = LogRecord::new(severity, self.name.as_str(), message.to_string());
        if let Some(caller) = caller {
            record = record.with_caller(caller);
        }
        if !level.is_standard() {
            record = record.with_context_entry(ORIGINAL_LEVEL_KEY, level.name());
        }
        self.backend.append(record);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}

/// Convenience macros for logging with format strings and caller context.
///
/// Each macro logs at one legacy level and passes the calling module's
/// path as the record's caller attribute.
#[macro_export]
macro_rules! log_severe {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_with_caller(&$crate::Level::SEVERE, module_path!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_with_caller(&$crate::Level::WARNING, module_path!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_with_caller(&$crate::Level::INFO, module_path!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_config {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_with_caller(&$crate::Level::CONFIG, module_path!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fine {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_with_caller(&$crate::Level::FINE, module_path!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_finer {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_with_caller(&$crate::Level::FINER, module_path!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_finest {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_with_caller(&$crate::Level::FINEST, module_path!(), format_args!($($arg)*))
    };
}
