//! Level configuration file handling.
//!
//! Loads a [`LevelConfig`] from an INI file. The `[levels]` section maps
//! logger names to severity names; the reserved key `root` sets the
//! default:
//!
//! ```ini
//! [levels]
//! root = info
//! payments = debug
//! payments.reconcile = trace
//! ```

use super::LevelConfig;
use ini::Ini;
use std::path::Path;
use thiserror::Error;

/// INI section holding the level table.
pub const LEVELS_SECTION: &str = "levels";

/// Reserved key for the root default severity.
pub const ROOT_KEY: &str = "root";

/// Level configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read level config: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to parse inline config content
    #[error("Failed to parse level config: {0}")]
    ParseError(#[from] ini::ParseError),

    /// A key held something that is not a severity name
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

impl LevelConfig {
    /// Load a level configuration from an INI file.
    ///
    /// A file without a `[levels]` section yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value does not
    /// parse as a severity name.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path)?;
        Self::from_ini(&ini)
    }

    /// Parse a level configuration from INI content.
    pub fn from_ini_str(content: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(content)?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let Some(section) = ini.section(Some(LEVELS_SECTION)) else {
            return Ok(config);
        };

        for (key, value) in section.iter() {
            let severity = value
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    section: LEVELS_SECTION.to_string(),
                    key: key.to_string(),
                    value: value.to_string(),
                    reason: "expected trace, debug, info, warn, or error".to_string(),
                })?;

            if key == ROOT_KEY {
                config = config.with_default(severity);
            } else {
                config = config.with_threshold(key, severity);
            }
        }

        Ok(config)
    }
}
