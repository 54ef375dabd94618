//! The seam through which the context asks for a move.

use super::types::Cell;
use derive_more::{Display, Error, From};

/// Failure of a move source to produce any move at all.
///
/// Invalid answers are resolved inside the source; only the loss of
/// the input itself reaches the caller.
#[derive(Debug, Display, Error, From)]
pub enum InputError {
    /// The input stream ended before a valid move was given.
    #[display("Input closed before a move was chosen")]
    Closed,

    /// Reading or prompting failed.
    #[display("Input failed: {}", _0)]
    #[from]
    Io(std::io::Error),
}

/// Something that picks the next move for a player.
pub trait MoveSource {
    /// Returns a cell that is not in `occupied`.
    ///
    /// Implementations retry internally until they have a valid cell.
    fn choose_move(&mut self, occupied: &[Cell], player_name: &str) -> Result<Cell, InputError>;
}
