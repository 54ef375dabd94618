//! Tricky game core: board, players, rules and the turn state machine.

mod context;
mod invariants;
mod player;
mod rules;
mod snapshot;
mod source;
mod types;

pub use context::{GameContext, GameOutcome, GamePhase, TIE_MESSAGE, TurnError};
pub use invariants::{
    AlternatingTurnInvariant, BoardMatchesHistoryInvariant, GameInvariants, Invariant,
    InvariantSet, InvariantViolation, WinnerLatchInvariant,
};
pub use player::PlayerState;
pub use rules::{WINNING_TRIPLES, WinnerPredicate, has_winning_line, is_full, winning_triple};
pub use snapshot::{GameSnapshot, PlayerRecord};
pub use source::{InputError, MoveSource};
pub use types::{BOARD_SIZE, Board, Cell, CellOutOfRange, Mark, Seat};
