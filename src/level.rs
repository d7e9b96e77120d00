//! Legacy platform log levels.
//!
//! The bridged platform orders its levels by an integer value rather than
//! by a closed enum, and callers may define their own levels at arbitrary
//! values. Both forms are represented by [`Level`]: the standard levels are
//! associated constants, custom levels come from [`Level::custom`].

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// A named severity level on the legacy platform's integer scale.
///
/// Levels are ordered by their numeric value; the name is carried so that
/// custom levels survive the trip through the backend's smaller level set
/// (see [`crate::record::ORIGINAL_LEVEL_KEY`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Level {
    name: Cow<'static, str>,
    value: i32,
}

impl Level {
    /// Threshold that turns a logger off entirely.
    pub const OFF: Level = Level::standard("OFF", i32::MAX);
    /// Serious failures.
    pub const SEVERE: Level = Level::standard("SEVERE", 1000);
    /// Potential problems.
    pub const WARNING: Level = Level::standard("WARNING", 900);
    /// Informational messages.
    pub const INFO: Level = Level::standard("INFO", 800);
    /// Static configuration messages.
    pub const CONFIG: Level = Level::standard("CONFIG", 700);
    /// Tracing information.
    pub const FINE: Level = Level::standard("FINE", 500);
    /// Fairly detailed tracing.
    pub const FINER: Level = Level::standard("FINER", 400);
    /// Highly detailed tracing.
    pub const FINEST: Level = Level::standard("FINEST", 300);
    /// Threshold that enables every message.
    pub const ALL: Level = Level::standard("ALL", i32::MIN);

    /// The standard levels, ascending by value.
    pub const STANDARD: [Level; 9] = [
        Level::ALL,
        Level::FINEST,
        Level::FINER,
        Level::FINE,
        Level::CONFIG,
        Level::INFO,
        Level::WARNING,
        Level::SEVERE,
        Level::OFF,
    ];

    const fn standard(name: &'static str, value: i32) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value,
        }
    }

    /// Create a custom level with an arbitrary name and value.
    ///
    /// Custom levels participate in ordering and enablement checks like any
    /// other level. When logged, they are mapped to the backend's default
    /// severity and their name is preserved in the record context.
    ///
    /// # Example
    ///
    /// ```
    /// use logbridge::Level;
    ///
    /// let defcon = Level::custom("DEFCON_1", 11_000);
    /// assert!(defcon > Level::SEVERE);
    /// ```
    pub fn custom(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            value,
        }
    }

    /// Returns the level name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the numeric value on the platform scale.
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns true if this is one of the standard platform levels.
    pub fn is_standard(&self) -> bool {
        Self::STANDARD
            .iter()
            .any(|level| level.value == self.value && level.name == self.name)
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        // Value decides; the name breaks ties between distinct levels at
        // the same value.
        self.value
            .cmp(&other.value)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
