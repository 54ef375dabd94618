//! Text rendering of the board.

use crate::game::{Board, Cell};
use std::fmt;

/// Draws the board as a boxed 3x3 grid.
///
/// Empty cells show their number so the grid doubles as the move
/// reference.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in Cell::ALL.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-----------")?;
            }
            writeln!(f, "   |   |")?;
            let symbols: Vec<String> = cells
                .iter()
                .map(|cell| match self.get(*cell) {
                    Some(mark) => mark.to_string(),
                    None => cell.to_string(),
                })
                .collect();
            writeln!(f, " {} | {} | {}", symbols[0], symbols[1], symbols[2])?;
            writeln!(f, "   |   |")?;
        }
        Ok(())
    }
}
