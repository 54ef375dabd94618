//! Draw detection for Tricky.

use super::super::types::{BOARD_SIZE, Board};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board after a move that completed no line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == BOARD_SIZE
}

#[cfg(test)]
mod tests {
    use super::super::super::types::{Cell, Mark};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Cell::ALL[4], Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for (i, cell) in Cell::ALL.into_iter().enumerate() {
            board.set(cell, if i % 2 == 0 { Mark::X } else { Mark::O });
        }
        assert!(is_full(&board));
    }
}
