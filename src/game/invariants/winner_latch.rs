//! Winner latch invariant: a win flag implies a terminal game.

use super::super::context::GameContext;
use super::Invariant;

/// Invariant: At most one player has won, and only in a finished game.
pub struct WinnerLatchInvariant;

impl Invariant<GameContext> for WinnerLatchInvariant {
    fn holds(game: &GameContext) -> bool {
        let winners = game.players().iter().filter(|p| p.is_winner()).count();
        match winners {
            0 => true,
            1 => !game.is_active(),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "At most one winner, and only once the game is over"
    }
}
