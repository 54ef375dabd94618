//! Tricky - a two-player tic-tac-toe game built on an explicit turn state machine.
//!
//! # Architecture
//!
//! - **Game**: board, players, win rule and the [`GameContext`] that drives turns
//! - **Console**: move input with re-prompting, board rendering, session loop
//! - **Config**: marks, fixed player names and display options from TOML
//!
//! # Example
//!
//! ```
//! use tricky_game::{Cell, GameContext, GameOutcome};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = GameContext::with_names("Ana", "Luis");
//! for n in [1, 4, 2, 5, 3] {
//!     game.record_turn(Cell::new(n)?)?;
//! }
//! assert_eq!(
//!     game.game_result(),
//!     Some(GameOutcome::Winner { name: "Ana".to_string() })
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod game;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Console front end
pub use console::{
    Console, MoveInputError, Scoreboard, Session, SessionError, parse_move, wants_another,
};

// Crate-level exports - Game core
pub use game::{
    AlternatingTurnInvariant, BOARD_SIZE, Board, BoardMatchesHistoryInvariant, Cell,
    CellOutOfRange, GameContext, GameInvariants, GameOutcome, GamePhase, GameSnapshot,
    InputError, Invariant, InvariantSet, InvariantViolation, Mark, MoveSource, PlayerRecord,
    PlayerState, Seat, TIE_MESSAGE, TurnError, WINNING_TRIPLES, WinnerLatchInvariant,
    WinnerPredicate, has_winning_line, is_full, winning_triple,
};
