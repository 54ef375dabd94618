//! Alternating turn invariant: player one, player two, player one, ...

use super::super::context::GameContext;
use super::super::types::Seat;
use super::Invariant;

/// Invariant: Players alternate, player one first.
///
/// Player one has made as many moves as player two, or exactly one more.
/// While the game runs, the seat to move follows from those counts.
pub struct AlternatingTurnInvariant;

impl Invariant<GameContext> for AlternatingTurnInvariant {
    fn holds(game: &GameContext) -> bool {
        let ones = game.player(Seat::PlayerOne).movements().len();
        let twos = game.player(Seat::PlayerTwo).movements().len();

        if ones != twos && ones != twos + 1 {
            return false;
        }

        if !game.is_active() {
            return true;
        }

        let expected = if ones == twos {
            Seat::PlayerOne
        } else {
            Seat::PlayerTwo
        };
        game.active_seat() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting with player one"
    }
}
