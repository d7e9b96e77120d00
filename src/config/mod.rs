//! Backend level configuration.
//!
//! Determines the minimum enabled severity per logger name. Names are
//! dotted paths; a name without an explicit threshold falls back to its
//! nearest configured ancestor, then to the root default. File loading
//! lives in [`file`].

mod file;

pub use file::{ConfigError, LEVELS_SECTION, ROOT_KEY};

use crate::severity::Severity;
use std::collections::BTreeMap;

/// Minimum enabled severity per logger name.
///
/// # Example
///
/// ```
/// use logbridge::{LevelConfig, Severity};
///
/// let config = LevelConfig::default()
///     .with_default(Severity::Warn)
///     .with_threshold("payments", Severity::Debug);
///
/// assert_eq!(config.resolve("payments.retry"), Severity::Debug);
/// assert_eq!(config.resolve("http"), Severity::Warn);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelConfig {
    default: Severity,
    thresholds: BTreeMap<String, Severity>,
}

impl LevelConfig {
    /// Create a configuration with the given root default and no per-name
    /// thresholds.
    pub fn new(default: Severity) -> Self {
        Self {
            default,
            thresholds: BTreeMap::new(),
        }
    }

    /// Set the root default severity.
    pub fn with_default(mut self, default: Severity) -> Self {
        self.default = default;
        self
    }

    /// Set the threshold for one logger name (and, by prefix fallback, its
    /// descendants without their own threshold).
    pub fn with_threshold(mut self, name: impl Into<String>, severity: Severity) -> Self {
        self.thresholds.insert(name.into(), severity);
        self
    }

    /// The root default severity.
    pub fn default_severity(&self) -> Severity {
        self.default
    }

    /// Resolve the effective threshold for a logger name.
    ///
    /// Tries the exact name, then each dotted prefix from longest to
    /// shortest, then the root default.
    pub fn resolve(&self, name: &str) -> Severity {
        let mut candidate = name;
        loop {
            if let Some(severity) = self.thresholds.get(candidate) {
                return *severity;
            }
            match candidate.rfind('.') {
                Some(dot) => candidate = &candidate[..dot],
                None => return self.default,
            }
        }
    }

    /// Whether a record at `severity` would be emitted for `name`.
    pub fn enables(&self, name: &str, severity: Severity) -> bool {
        severity >= self.resolve(name)
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root_severity_is_info() {
        let config = LevelConfig::default();
        assert_eq!(config.default_severity(), Severity::Info);
        assert_eq!(config.resolve("anything"), Severity::Info);
    }

    #[test]
    fn test_exact_threshold_wins() {
        let config = LevelConfig::default()
            .with_threshold("app", Severity::Warn)
            .with_threshold("app.io", Severity::Trace);

        assert_eq!(config.resolve("app.io"), Severity::Trace);
        assert_eq!(config.resolve("app"), Severity::Warn);
    }

    #[test]
    fn test_prefix_fallback() {
        let config = LevelConfig::default().with_threshold("app", Severity::Debug);

        assert_eq!(config.resolve("app.io.socket"), Severity::Debug);
        assert_eq!(config.resolve("app.io"), Severity::Debug);
        // Sibling trees are unaffected.
        assert_eq!(config.resolve("other"), Severity::Info);
        // A name that merely starts with the same characters is not a
        // dotted descendant.
        assert_eq!(config.resolve("apples"), Severity::Info);
    }

    #[test]
    fn test_enables_compares_against_threshold() {
        let config = LevelConfig::default().with_threshold("app", Severity::Debug);

        assert!(config.enables("app", Severity::Debug));
        assert!(config.enables("app", Severity::Error));
        assert!(!config.enables("app", Severity::Trace));
        assert!(!config.enables("elsewhere", Severity::Debug));
    }

    #[test]
    fn test_with_default_overrides_root() {
        let config = LevelConfig::default().with_default(Severity::Error);
        assert!(!config.enables("app", Severity::Warn));
        assert!(config.enables("app", Severity::Error));
    }
}
