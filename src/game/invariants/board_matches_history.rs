//! Board/history agreement: the board is exactly the replay of both histories.

use super::super::context::GameContext;
use super::super::types::Board;
use super::Invariant;

/// Invariant: Occupied cells are exactly the cells in the movement histories.
///
/// Replaying both histories onto an empty board must reproduce the live
/// board, and no cell may appear twice across the histories.
pub struct BoardMatchesHistoryInvariant;

impl Invariant<GameContext> for BoardMatchesHistoryInvariant {
    fn holds(game: &GameContext) -> bool {
        let mut replayed = Board::new();

        for player in game.players() {
            for cell in player.movements() {
                if !replayed.is_empty(*cell) {
                    return false;
                }
                replayed.set(*cell, player.mark());
            }
        }

        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells match the union of both movement histories"
    }
}
