//! Rule configuration.
//!
//! Rules are loaded from TOML. Every field has a default, so an empty or
//! missing file gives the standard castling-free rule set.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional rules layered on top of the core move rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Whether kings may castle. Off by default.
    pub castling: bool,
}

impl RulesConfig {
    /// Rules with castling enabled.
    pub const fn with_castling() -> Self {
        RulesConfig { castling: true }
    }

    /// Parses rules from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads rules from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it is not valid TOML for these rules.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_defaults() {
        let rules = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(rules, RulesConfig::default());
        assert!(!rules.castling);
    }

    #[test]
    fn parse_castling_enabled() {
        let rules = RulesConfig::from_toml_str("castling = true").unwrap();
        assert_eq!(rules, RulesConfig::with_castling());
    }

    #[test]
    fn parse_error_on_wrong_type() {
        let result = RulesConfig::from_toml_str("castling = \"yes\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let rules = RulesConfig::load("definitely/not/here/rules.toml").unwrap();
        assert_eq!(rules, RulesConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("rules-{}.toml", std::process::id()));
        std::fs::write(&path, "castling = true\n").unwrap();
        let rules = RulesConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(rules.castling);
    }

    #[test]
    fn serialization_roundtrip() {
        let text = toml::to_string(&RulesConfig::with_castling()).unwrap();
        assert_eq!(RulesConfig::from_toml_str(&text).unwrap(), RulesConfig::with_castling());
    }
}
