//! Core domain types for the Tricky board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// A cell on the board, numbered 1-9 in row-major order.
///
/// ```text
///  1 | 2 | 3
///  4 | 5 | 6
///  7 | 8 | 9
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[display("{}", _0)]
pub struct Cell(u8);

/// A value that does not name one of the 9 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{} is not a cell number between 1 and 9", value)]
pub struct CellOutOfRange {
    /// The rejected value.
    pub value: i64,
}

impl Cell {
    /// All cells in row-major order.
    pub const ALL: [Cell; BOARD_SIZE] = [
        Cell(1),
        Cell(2),
        Cell(3),
        Cell(4),
        Cell(5),
        Cell(6),
        Cell(7),
        Cell(8),
        Cell(9),
    ];

    /// Creates a cell from its 1-based number.
    #[instrument]
    pub fn new(value: i64) -> Result<Self, CellOutOfRange> {
        match u8::try_from(value) {
            Ok(n @ 1..=9) => Ok(Self(n)),
            _ => Err(CellOutOfRange { value }),
        }
    }

    /// Returns the 1-based cell number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Returns the 0-based slot index into the board.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for Cell {
    type Error = CellOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

/// The single-character label a player writes onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{}", _0)]
pub struct Mark(char);

impl Mark {
    /// Default mark of the first player.
    pub const X: Mark = Mark('X');
    /// Default mark of the second player.
    pub const O: Mark = Mark('O');

    /// Wraps a character as a mark.
    pub fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the underlying character.
    pub fn symbol(self) -> char {
        self.0
    }
}

/// One of the two seats at the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Seat {
    /// Moves first.
    #[strum(to_string = "Player 1")]
    PlayerOne,
    /// Moves second.
    #[strum(to_string = "Player 2")]
    PlayerTwo,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::PlayerOne => Seat::PlayerTwo,
            Seat::PlayerTwo => Seat::PlayerOne,
        }
    }

    /// Returns the 1-based seat number.
    pub fn number(self) -> u8 {
        match self {
            Seat::PlayerOne => 1,
            Seat::PlayerTwo => 2,
        }
    }

    pub(crate) fn slot(self) -> usize {
        usize::from(self.number() - 1)
    }
}

/// 3x3 board of optional marks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Slots in row-major order, slot `i` holds cell `i + 1`.
    slots: [Option<Mark>; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at the given cell, if any.
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.slots[cell.index()]
    }

    /// Writes a mark into the given cell.
    pub fn set(&mut self, cell: Cell, mark: Mark) {
        self.slots[cell.index()] = Some(mark);
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Returns all slots in row-major order.
    pub fn slots(&self) -> &[Option<Mark>; BOARD_SIZE] {
        &self.slots
    }

    /// Counts the occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns the cells still free, in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_range() {
        assert!(Cell::new(0).is_err());
        assert!(Cell::new(10).is_err());
        assert!(Cell::new(-3).is_err());
        assert_eq!(Cell::new(1).map(Cell::index), Ok(0));
        assert_eq!(Cell::new(9).map(Cell::index), Ok(8));
    }

    #[test]
    fn test_cell_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Cell>("0").is_err());
        assert_eq!(serde_json::from_str::<Cell>("5").ok(), Cell::new(5).ok());
    }

    #[test]
    fn test_board_set_and_count() {
        let mut board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_cells().len(), BOARD_SIZE);

        board.set(Cell::ALL[4], Mark::X);
        assert_eq!(board.get(Cell::ALL[4]), Some(Mark::X));
        assert!(!board.is_empty(Cell::ALL[4]));
        assert_eq!(board.occupied_count(), 1);
        assert!(!board.empty_cells().contains(&Cell::ALL[4]));
    }

    #[test]
    fn test_seat_opponent() {
        assert_eq!(Seat::PlayerOne.opponent(), Seat::PlayerTwo);
        assert_eq!(Seat::PlayerTwo.opponent(), Seat::PlayerOne);
        assert_eq!(Seat::PlayerOne.to_string(), "Player 1");
    }
}
