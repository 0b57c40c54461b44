//! Self-play configuration loaded from TOML.

use chess_engine::{ConfigError, RulesConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for a self-play run.
///
/// Uses `selfplay.toml` in the current directory by default. Every field
/// may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelfPlayConfig {
    /// Optional rules in force for the game.
    #[serde(default)]
    pub rules: RulesConfig,
    /// Stop after this many plies if the game has not ended. Defaults to 200.
    #[serde(default = "default_max_plies")]
    pub max_plies: u32,
    /// Seed for the move picker. A random seed is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Starting position in FEN. The standard start when absent.
    #[serde(default)]
    pub start_fen: Option<String>,
}

fn default_max_plies() -> u32 {
    200
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            rules: RulesConfig::default(),
            max_plies: default_max_plies(),
            seed: None,
            start_fen: None,
        }
    }
}

impl SelfPlayConfig {
    /// Loads the configuration at `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path.
    pub fn config_path() -> PathBuf {
        PathBuf::from("selfplay.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
max_plies = 50
seed = 7
start_fen = "4k3/8/8/8/8/8/8/R3K2R w KQ"

[rules]
castling = true
"#;

        let config: SelfPlayConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.max_plies, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.start_fen.as_deref(), Some("4k3/8/8/8/8/8/8/R3K2R w KQ"));
        assert!(config.rules.castling);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: SelfPlayConfig = toml::from_str("").unwrap();
        assert_eq!(config, SelfPlayConfig::default());
        assert_eq!(config.max_plies, 200);
        assert!(!config.rules.castling);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let path = std::env::temp_dir().join(format!("selfplay-{}.toml", std::process::id()));
        std::fs::write(&path, "max_plies = [").unwrap();
        let result = SelfPlayConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = SelfPlayConfig::load(Path::new("no/such/selfplay.toml")).unwrap();
        assert_eq!(config, SelfPlayConfig::default());
    }
}
