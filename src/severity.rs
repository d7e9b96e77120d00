//! Backend severities and the level mapping table.
//!
//! The backend expresses five ordered severities, mirroring
//! [`tracing::Level`]. Every legacy [`Level`] maps to exactly one severity:
//! standard levels through a fixed monotonic table, custom levels to
//! [`Severity::DEFAULT`] (their name is preserved in the record context by
//! the bridge).

use crate::level::Level;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log record on the backend's scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Verbose tracing information
    Trace,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Potential problems
    Warn,
    /// Failures
    Error,
}

impl Severity {
    /// Severity assigned to levels outside the standard mapping table.
    pub const DEFAULT: Severity = Severity::Info;

    /// All severities, ascending.
    pub const ASCENDING: [Severity; 5] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Map a legacy level onto the backend scale.
    ///
    /// The mapping is total and monotonic over the standard levels. Any
    /// other value falls back to [`Severity::DEFAULT`], regardless of where
    /// it lands on the platform scale; the bridge preserves the original
    /// name in the record context.
    pub fn from_level(level: &Level) -> Self {
        match level.value() {
            v if v == Level::ALL.value() => Severity::Trace,
            v if v == Level::FINEST.value() => Severity::Trace,
            v if v == Level::FINER.value() => Severity::Trace,
            v if v == Level::FINE.value() => Severity::Debug,
            v if v == Level::CONFIG.value() => Severity::Debug,
            v if v == Level::INFO.value() => Severity::Info,
            v if v == Level::WARNING.value() => Severity::Warn,
            v if v == Level::SEVERE.value() => Severity::Error,
            v if v == Level::OFF.value() => Severity::Error,
            _ => Severity::DEFAULT,
        }
    }

    /// Map back to the legacy scale.
    ///
    /// Used for the effective-level view on a logger handle. The reverse
    /// direction picks one representative per severity, so `CONFIG` and
    /// `FINER` never appear here.
    pub fn to_level(self) -> Level {
        match self {
            Severity::Trace => Level::FINEST,
            Severity::Debug => Level::FINE,
            Severity::Info => Level::INFO,
            Severity::Warn => Level::WARNING,
            Severity::Error => Level::SEVERE,
        }
    }

    /// Returns the severity name for configuration and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Returns the equivalent `tracing` level.
    pub fn as_tracing(&self) -> tracing::Level {
        match self {
            Severity::Trace => tracing::Level::TRACE,
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warn => tracing::Level::WARN,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown severity name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown severity '{0}': expected trace, debug, info, warn, or error")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
