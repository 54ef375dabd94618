//! Win detection for Tricky.

use super::super::types::Cell;
use tracing::instrument;

/// Decides whether one player's move set contains a complete line.
///
/// Must be pure: the context calls it once per turn with the acting
/// player's full history.
pub type WinnerPredicate = fn(&[Cell]) -> bool;

const C: [Cell; 9] = Cell::ALL;

/// The 8 cell triples that win the game.
pub const WINNING_TRIPLES: [[Cell; 3]; 8] = [
    // Rows
    [C[0], C[1], C[2]],
    [C[3], C[4], C[5]],
    [C[6], C[7], C[8]],
    // Columns
    [C[0], C[3], C[6]],
    [C[1], C[4], C[7]],
    [C[2], C[5], C[8]],
    // Diagonals
    [C[0], C[4], C[8]],
    [C[2], C[4], C[6]],
];

/// Returns the first winning triple fully contained in `moves`.
#[instrument]
pub fn winning_triple(moves: &[Cell]) -> Option<[Cell; 3]> {
    WINNING_TRIPLES
        .into_iter()
        .find(|triple| triple.iter().all(|cell| moves.contains(cell)))
}

/// Returns true iff `moves` is a superset of some winning triple.
///
/// This is the default [`WinnerPredicate`].
pub fn has_winning_line(moves: &[Cell]) -> bool {
    winning_triple(moves).is_some()
}
