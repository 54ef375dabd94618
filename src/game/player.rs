//! Per-player state for a Tricky game.

use super::types::{Cell, Mark, Seat};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One participant in a game.
///
/// All fields are owned by the instance: two players never share a
/// movement history or a win flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    seat: Seat,
    mark: Mark,
    name: String,
    movements: Vec<Cell>,
    winner: bool,
}

impl PlayerState {
    /// Creates a player with an empty movement history.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(seat: Seat, mark: Mark, name: impl AsRef<str>) -> Self {
        Self {
            seat,
            mark,
            name: name.as_ref().to_string(),
            movements: Vec::new(),
            winner: false,
        }
    }

    /// Returns the seat this player occupies.
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the mark this player writes on the board.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a move to the history.
    ///
    /// Callers guarantee the cell is free in both players' histories.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn record_move(&mut self, cell: Cell) {
        self.movements.push(cell);
    }

    /// Returns the moves made so far, oldest first.
    pub fn movements(&self) -> &[Cell] {
        &self.movements
    }

    /// Returns whether this player has won.
    pub fn is_winner(&self) -> bool {
        self.winner
    }

    /// Sets the win flag.
    pub fn set_winner(&mut self, winner: bool) {
        self.winner = winner;
    }

    /// Returns the seat that acts after this one.
    pub fn next_player(&self) -> Seat {
        self.seat.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histories_are_per_instance() {
        let mut one = PlayerState::new(Seat::PlayerOne, Mark::X, "Ana");
        let two = PlayerState::new(Seat::PlayerTwo, Mark::O, "Luis");

        one.record_move(Cell::ALL[0]);
        one.set_winner(true);

        assert_eq!(one.movements(), &[Cell::ALL[0]]);
        assert!(two.movements().is_empty());
        assert!(!two.is_winner());
    }

    #[test]
    fn test_next_player_alternates() {
        let one = PlayerState::new(Seat::PlayerOne, Mark::X, "Ana");
        let two = PlayerState::new(Seat::PlayerTwo, Mark::O, "Luis");
        assert_eq!(one.next_player(), Seat::PlayerTwo);
        assert_eq!(two.next_player(), Seat::PlayerOne);
    }
}
