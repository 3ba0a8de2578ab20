//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// How a blank answer to "play again?" is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmptyAnswer {
    /// Blank ends the session, like `n`.
    #[default]
    Quit,
    /// Blank is rejected and the question asked again.
    Reprompt,
}

impl EmptyAnswer {
    /// Returns the answer hint shown after the question.
    #[instrument]
    pub fn hint(self) -> &'static str {
        match self {
            Self::Quit => "(y/N)",
            Self::Reprompt => "(y/n)",
        }
    }
}

/// Session configuration.
///
/// Every field has a default, so an empty file or no file at all is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Comma-separated word list.
    #[serde(default = "default_word_list")]
    #[setters(into)]
    word_list: PathBuf,

    /// Whether consecutive wins are counted and shown.
    #[serde(default = "default_track_streak")]
    track_streak: bool,

    /// Meaning of a blank answer to "play again?".
    #[serde(default)]
    empty_answer: EmptyAnswer,

    /// Fixed seed for word selection; random when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

#[instrument]
fn default_word_list() -> PathBuf {
    PathBuf::from("word_list.txt")
}

#[instrument]
fn default_track_streak() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_list: default_word_list(),
            track_streak: default_track_streak(),
            empty_answer: EmptyAnswer::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(word_list = %config.word_list.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = GameConfig::from_toml("track_streak = false\nempty_answer = \"reprompt\"").unwrap();
        assert!(!config.track_streak());
        assert_eq!(*config.empty_answer(), EmptyAnswer::Reprompt);
        assert_eq!(config.word_list(), &PathBuf::from("word_list.txt"));
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = GameConfig::from_toml("empty_answer = \"maybe\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::default()
            .with_word_list("animals.txt")
            .with_seed(9)
            .with_track_streak(false);
        assert_eq!(config.word_list(), &PathBuf::from("animals.txt"));
        assert_eq!(*config.seed(), Some(9));
        assert!(!config.track_streak());
    }
}
