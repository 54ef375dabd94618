//! Game configuration loaded from TOML.

use crate::game::Seat;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tricky.toml";

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Mark written by player one.
    player_one_mark: char,

    /// Mark written by player two.
    player_two_mark: char,

    /// Fixed name for player one; asked at the start of each game if unset.
    player_one_name: Option<String>,

    /// Fixed name for player two; asked at the start of each game if unset.
    player_two_name: Option<String>,

    /// Print the numbered reference board and instructions before each game.
    show_reference_board: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one_mark: 'X',
            player_two_mark: 'O',
            player_one_name: None,
            player_two_name: None,
            show_reference_board: true,
        }
    }
}

impl GameConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::parse_file(path)?;
        config.validate()?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses a TOML file without validating it.
    ///
    /// Callers that apply further overrides validate the final result.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Parses `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else returns the defaults. The result is not validated.
    #[instrument]
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::parse_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::parse_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns the fixed name for `seat`, blank names falling back to the seat.
    pub fn fixed_name(&self, seat: Seat) -> Option<String> {
        let raw = match seat {
            Seat::PlayerOne => self.player_one_name.as_deref(),
            Seat::PlayerTwo => self.player_two_name.as_deref(),
        };
        raw.map(|name| display_name(name, seat))
    }

    /// Checks that the marks can be told apart from each other and from
    /// the cell numbers on the board.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for mark in [self.player_one_mark, self.player_two_mark] {
            if mark.is_whitespace() || mark.is_ascii_digit() {
                return Err(ConfigError::new(format!(
                    "Mark {:?} must be a visible character other than a digit",
                    mark
                )));
            }
        }
        if self.player_one_mark == self.player_two_mark {
            return Err(ConfigError::new(format!(
                "Both players cannot use the mark {:?}",
                self.player_one_mark
            )));
        }
        if let (Some(one), Some(two)) = (
            self.fixed_name(Seat::PlayerOne),
            self.fixed_name(Seat::PlayerTwo),
        ) && one == two
        {
            return Err(ConfigError::new(format!(
                "Both players cannot be named {:?}",
                one
            )));
        }
        Ok(())
    }
}

/// Trims a typed or configured name, using the seat label when blank.
pub fn display_name(raw: &str, seat: Seat) -> String {
    let name = raw.trim();
    if name.is_empty() {
        seat.to_string()
    } else {
        name.to_string()
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
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.player_one_mark(), 'X');
        assert_eq!(*config.player_two_mark(), 'O');
        assert!(config.player_one_name().is_none());
        assert!(*config.show_reference_board());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("player_one_name = \"Ana\"\nplayer_two_mark = \"@\"\n");
        let config = GameConfig::from_file(file.path()).expect("config");
        assert_eq!(config.player_one_name().as_deref(), Some("Ana"));
        assert_eq!(*config.player_two_mark(), '@');
        assert_eq!(*config.player_one_mark(), 'X');
    }

    #[test]
    fn test_duplicate_marks_rejected() {
        let file = write_config("player_one_mark = \"O\"\n");
        let err = GameConfig::from_file(file.path()).expect_err("duplicate marks");
        assert!(err.message.contains("cannot use the mark"));
    }

    #[test]
    fn test_digit_mark_rejected() {
        let config = GameConfig::default().with_player_two_mark('7');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file_rejected() {
        let file = write_config("show_reference_board = \"maybe\"\n");
        let err = GameConfig::from_file(file.path()).expect_err("bad type");
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_parse_file_skips_validation() {
        let file = write_config("player_one_mark = \"O\"\n");
        let config = GameConfig::parse_file(file.path()).expect("parsed");
        assert_eq!(*config.player_one_mark(), 'O');
        assert!(config.validate().is_err());
        assert!(GameConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_blank_fixed_name_falls_back_to_seat() {
        let config = GameConfig::default().with_player_one_name(Some("  ".to_string()));
        assert_eq!(
            config.fixed_name(Seat::PlayerOne).as_deref(),
            Some("Player 1")
        );
        assert_eq!(config.fixed_name(Seat::PlayerTwo), None);
    }

    #[test]
    fn test_duplicate_fixed_names_rejected() {
        let config = GameConfig::default()
            .with_player_one_name(Some("Ana".to_string()))
            .with_player_two_name(Some(" Ana ".to_string()));
        let err = config.validate().expect_err("duplicate names");
        assert!(err.message.contains("cannot be named"));

        let config = GameConfig::default()
            .with_player_one_name(Some(String::new()))
            .with_player_two_name(Some("Player 1".to_string()));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = GameConfig::from_file(dir.path().join("absent.toml")).expect_err("missing");
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
