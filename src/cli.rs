//! Command-line interface for tricky.

use clap::Parser;
use std::path::PathBuf;
use tricky_game::{ConfigError, GameConfig};

/// Tricky - two players, one board, three in a row
#[derive(Parser, Debug)]
#[command(name = "tricky")]
#[command(about = "Play Tricky (tic-tac-toe) on the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tricky.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of player one (asked each game if omitted)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of player two (asked each game if omitted)
    #[arg(long)]
    pub player_two: Option<String>,

    /// Mark for player one
    #[arg(long)]
    pub mark_one: Option<char>,

    /// Mark for player two
    #[arg(long)]
    pub mark_two: Option<char>,

    /// Skip the instructions and numbered reference board
    #[arg(long)]
    pub no_reference_board: bool,

    /// Append a JSON line describing each finished game to this file
    #[arg(long)]
    pub record: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file, applies command-line overrides, then validates
    /// the combined result.
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig::discover(self.config.as_deref())?;

        if let Some(name) = &self.player_one {
            config = config.with_player_one_name(Some(name.clone()));
        }
        if let Some(name) = &self.player_two {
            config = config.with_player_two_name(Some(name.clone()));
        }
        if let Some(mark) = self.mark_one {
            config = config.with_player_one_mark(mark);
        }
        if let Some(mark) = self.mark_two {
            config = config.with_player_two_mark(mark);
        }
        if self.no_reference_board {
            config = config.with_show_reference_board(false);
        }

        config.validate()?;
        Ok(config)
    }
}
