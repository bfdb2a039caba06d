//! Configuration loading for draughts sessions.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Limits applied by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Maximum number of games held at once. Defaults to 1024. When full,
    /// the oldest finished game is dropped to make room.
    #[serde(default = "default_max_games")]
    pub max_games: usize,
    /// Maximum length of a seat label, in characters. Defaults to 32.
    #[serde(default = "default_max_player_name_len")]
    pub max_player_name_len: usize,
}

fn default_max_games() -> usize {
    1024
}

fn default_max_player_name_len() -> usize {
    32
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_games: default_max_games(),
            max_player_name_len: default_max_player_name_len(),
        }
    }
}

impl SessionConfig {
    /// Parses configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a TOML file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded session config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_for_empty_file() {
        let config = SessionConfig::from_toml_str("").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.max_games, 1024);
        assert_eq!(config.max_player_name_len, 32);
    }

    #[test]
    fn partial_override() {
        let config = SessionConfig::from_toml_str("max_games = 4").unwrap();
        assert_eq!(config.max_games, 4);
        assert_eq!(config.max_player_name_len, 32);
    }

    #[test]
    fn parse_error() {
        let err = SessionConfig::from_toml_str("max_games = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_games = 2\nmax_player_name_len = 8").unwrap();
        let config = SessionConfig::load(file.path()).await.unwrap();
        assert_eq!(config.max_games, 2);
        assert_eq!(config.max_player_name_len, 8);
    }

    #[tokio::test]
    async fn load_missing_file() {
        let err = SessionConfig::load("/nonexistent/draughts.toml").await.unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }
}
