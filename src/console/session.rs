//! Interactive game sessions on a console.

use super::input::Console;
use crate::config::{GameConfig, display_name};
use crate::game::{
    Board, GameContext, GameOutcome, InputError, Mark, PlayerState, Seat, TurnError,
    has_winning_line,
};
use derive_more::{Display, Error, From};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

const INSTRUCTIONS: &str = "To play you will use the board below as a reference. \
At each turn you will be asked for your move,\n\
and you must put a number from 1 to 9, where the number represents the box you want to mark.\n\
Note: As the game progresses some boxes will already be occupied, \
and you only will be able to select the empty ones.";

/// Error that ends a session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// The players stopped answering.
    #[display("{}", _0)]
    #[from]
    Input(InputError),

    /// A turn could not be played.
    #[display("{}", _0)]
    #[from]
    Turn(TurnError),

    /// Writing to the console or the record file failed.
    #[display("Output failed: {}", _0)]
    #[from]
    Io(std::io::Error),

    /// A finished game could not be serialized.
    #[display("Failed to record game: {}", _0)]
    #[from]
    Record(serde_json::Error),
}

/// Wins per player name and ties across the games of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    wins: BTreeMap<String, u32>,
    ties: u32,
}

impl Scoreboard {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: &GameOutcome) {
        match outcome {
            GameOutcome::Winner { name } => *self.wins.entry(name.clone()).or_default() += 1,
            GameOutcome::Tie => self.ties += 1,
        }
    }

    /// Returns the wins of `name`.
    pub fn wins(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Returns the number of ties.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Returns the number of finished games.
    pub fn games(&self) -> u32 {
        self.wins.values().sum::<u32>() + self.ties
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games played: {}", self.games())?;
        for (name, wins) in &self.wins {
            writeln!(f, "  {name}: {wins} win(s)")?;
        }
        write!(f, "  Ties: {}", self.ties)
    }
}

/// Returns true if the answer starts with `y`, ignoring case.
pub fn wants_another(answer: &str) -> bool {
    answer
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Runs games on a console until the players decline another.
#[derive(Debug)]
pub struct Session<R, W> {
    console: Console<R, W>,
    config: GameConfig,
    scoreboard: Scoreboard,
    record: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over `console`.
    pub fn new(console: Console<R, W>, config: GameConfig) -> Self {
        Self {
            console,
            config,
            scoreboard: Scoreboard::default(),
            record: None,
        }
    }

    /// Appends a JSON line per finished game to `path`.
    pub fn with_record(mut self, path: impl Into<PathBuf>) -> Self {
        self.record = Some(path.into());
        self
    }

    /// Plays games until the answer to "play again" is not a yes.
    ///
    /// End of input at the play-again question counts as a no.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<&Scoreboard, SessionError> {
        loop {
            let outcome = self.play_game()?;
            self.scoreboard.record(&outcome);

            let again = match self.console.ask("Do you want to play again? Enter Yes or No. ") {
                Ok(answer) => wants_another(&answer),
                Err(InputError::Closed) => false,
                Err(e) => return Err(e.into()),
            };
            if !again {
                break;
            }
            debug!("Starting another game");
        }

        self.console.say(&self.scoreboard)?;
        info!(games = self.scoreboard.games(), "Session finished");
        Ok(&self.scoreboard)
    }

    /// Plays a single game to its end.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<GameOutcome, SessionError> {
        let reserved = self.config.fixed_name(Seat::PlayerTwo);
        let one = self.player_name(Seat::PlayerOne, reserved.as_deref())?;
        let two = self.player_name(Seat::PlayerTwo, Some(&one))?;

        self.console.say(format!(
            "Welcome to the Tricky game. Player 1: {one}, & Player 2: {two} will face each other."
        ))?;
        if *self.config.show_reference_board() {
            self.console.say(INSTRUCTIONS)?;
            self.console.say(Board::new())?;
        }

        let mut game = GameContext::new(
            PlayerState::new(Seat::PlayerOne, Mark::new(*self.config.player_one_mark()), one),
            PlayerState::new(Seat::PlayerTwo, Mark::new(*self.config.player_two_mark()), two),
            has_winning_line,
        );

        let outcome = loop {
            game.play_turn(&mut self.console)?;
            self.console.say(game.board())?;
            if let Some(outcome) = game.game_result() {
                break outcome;
            }
        };

        self.console.say(&outcome)?;
        self.write_record(&game)?;
        Ok(outcome)
    }

    /// Returns the configured name for `seat`, or asks until the typed
    /// name differs from `taken`.
    ///
    /// Fixed names never clash: `GameConfig::validate` rejects equal ones
    /// and a fixed second name is passed as `taken` for the first seat.
    fn player_name(&mut self, seat: Seat, taken: Option<&str>) -> Result<String, SessionError> {
        if let Some(name) = self.config.fixed_name(seat) {
            return Ok(name);
        }

        loop {
            let answer = self
                .console
                .ask(&format!("Please put the player {} name: ", seat.number()))?;
            let name = display_name(&answer, seat);
            if taken != Some(name.as_str()) {
                return Ok(name);
            }
            debug!(%name, "Name already taken, asking again");
            self.console
                .say(format!("The name {name} is already taken. Please choose another one"))?;
        }
    }

    fn write_record(&self, game: &GameContext) -> Result<(), SessionError> {
        let Some(path) = &self.record else {
            return Ok(());
        };
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        game.snapshot().write_json_line(file)?;
        debug!(path = %path.display(), "Game recorded");
        Ok(())
    }

    /// Returns the scoreboard so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the console.
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }
}
