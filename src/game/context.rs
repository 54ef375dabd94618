//! Turn state machine for a Tricky game.
//!
//! The context owns the board, both players and the win predicate.
//! Players only report the cell they chose. The context records it and
//! decides who acts next.

use super::invariants::{GameInvariants, InvariantSet};
use super::player::PlayerState;
use super::rules::{WinnerPredicate, has_winning_line, is_full};
use super::source::{InputError, MoveSource};
use super::types::{BOARD_SIZE, Board, Cell, Mark, Seat};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Message shown when nobody completed a line.
pub const TIE_MESSAGE: &str = "Game ends in a tie";

/// Where the state machine stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GamePhase {
    /// Player one holds the turn.
    PlayerOneTurn,
    /// Player two holds the turn.
    PlayerTwoTurn,
    /// A player completed a line. Terminal.
    GameWon,
    /// The board filled with no line. Terminal.
    GameDrawn,
}

impl GamePhase {
    /// Returns true once no further turns can be played.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameWon | GamePhase::GameDrawn)
    }
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameOutcome {
    /// A player completed a line.
    #[display("the game has ended and the winner is {}", name)]
    Winner {
        /// Display name of the winner.
        name: String,
    },
    /// The board filled with no line.
    #[display("Game ends in a tie")]
    Tie,
}

/// Error from [`GameContext::play_turn`].
#[derive(Debug, Display, Error, From)]
pub enum TurnError {
    /// The game already reached a terminal phase.
    #[display("Game is already over")]
    GameOver,

    /// The chosen cell already holds a mark.
    #[display("Cell {} is already occupied", cell)]
    CellOccupied {
        /// The rejected cell.
        cell: Cell,
    },

    /// The move source could not produce a move.
    #[display("{}", _0)]
    #[from]
    Input(InputError),
}

/// Shared state of one game session.
#[derive(Debug, Clone)]
pub struct GameContext {
    pub(super) board: Board,
    pub(super) players: [PlayerState; 2],
    winner_predicate: WinnerPredicate,
    active_seat: Seat,
    active: bool,
}

impl GameContext {
    /// Creates a context with player one to move.
    #[instrument(skip_all, fields(player_one = %player_one.name(), player_two = %player_two.name()))]
    pub fn new(
        player_one: PlayerState,
        player_two: PlayerState,
        winner_predicate: WinnerPredicate,
    ) -> Self {
        debug_assert_eq!(player_one.seat(), Seat::PlayerOne);
        debug_assert_eq!(player_two.seat(), Seat::PlayerTwo);

        let mut context = Self {
            board: Board::new(),
            players: [player_one, player_two],
            winner_predicate,
            active_seat: Seat::PlayerOne,
            active: true,
        };
        context.transition_to(Seat::PlayerOne);
        context
    }

    /// Creates a context with the default marks and win rule.
    pub fn with_names(player_one: impl AsRef<str>, player_two: impl AsRef<str>) -> Self {
        Self::new(
            PlayerState::new(Seat::PlayerOne, Mark::X, player_one),
            PlayerState::new(Seat::PlayerTwo, Mark::O, player_two),
            has_winning_line,
        )
    }

    /// Plays one turn for the active player.
    ///
    /// Asks `source` for a cell and records it. Fails without touching
    /// any state if the game is over or the source gives up.
    #[instrument(skip(self, source), fields(player = %self.active_player().name()))]
    pub fn play_turn<S: MoveSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<GamePhase, TurnError> {
        if !self.active {
            return Err(TurnError::GameOver);
        }

        let occupied = self.occupied_cells();
        let player_name = self.active_player().name().to_string();
        let cell = source.choose_move(&occupied, &player_name)?;
        self.record_turn(cell)
    }

    /// Records `cell` as the active player's move and advances the machine.
    ///
    /// Only the acting player's history is checked for a line: a move can
    /// only complete a line for the player who made it, so the opponent's
    /// set cannot have changed since their own last check.
    #[instrument(skip(self), fields(player = %self.active_player().name()))]
    pub fn record_turn(&mut self, cell: Cell) -> Result<GamePhase, TurnError> {
        if !self.active {
            return Err(TurnError::GameOver);
        }
        if !self.board.is_empty(cell) {
            warn!(%cell, "Rejected move onto an occupied cell");
            return Err(TurnError::CellOccupied { cell });
        }

        let winner_predicate = self.winner_predicate;
        let player = &mut self.players[self.active_seat.slot()];
        player.record_move(cell);
        self.board.set(cell, player.mark());
        debug!(%cell, mark = %player.mark(), "Move recorded");

        let won = winner_predicate(player.movements());
        if won {
            player.set_winner(true);
            info!(winner = %player.name(), "Game won");
        }
        let next = player.next_player();

        if won {
            self.active = false;
        } else if self.occupied_cells().len() == BOARD_SIZE {
            debug_assert!(is_full(&self.board));
            self.active = false;
            info!("Game drawn");
        } else {
            self.transition_to(next);
        }

        debug_assert!(
            GameInvariants::check_all(&*self).is_ok(),
            "Game invariants violated after move to {cell}"
        );

        Ok(self.phase())
    }

    /// Hands the turn to `seat`.
    fn transition_to(&mut self, seat: Seat) {
        self.active_seat = seat;
        debug!("Transition to {}", self.players[seat.slot()].name());
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        if self.active {
            match self.active_seat {
                Seat::PlayerOne => GamePhase::PlayerOneTurn,
                Seat::PlayerTwo => GamePhase::PlayerTwoTurn,
            }
        } else if self.players.iter().any(PlayerState::is_winner) {
            GamePhase::GameWon
        } else {
            GamePhase::GameDrawn
        }
    }

    /// Returns the outcome, or `None` while the game is still running.
    pub fn game_result(&self) -> Option<GameOutcome> {
        if self.active {
            return None;
        }
        let outcome = match self.players.iter().find(|p| p.is_winner()) {
            Some(winner) => GameOutcome::Winner {
                name: winner.name().to_string(),
            },
            None => GameOutcome::Tie,
        };
        Some(outcome)
    }

    /// Returns true until the game is won or drawn.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> &PlayerState {
        &self.players[seat.slot()]
    }

    /// Returns both players, player one first.
    pub fn players(&self) -> &[PlayerState; 2] {
        &self.players
    }

    /// Returns the seat holding the turn, or the last mover once terminal.
    pub fn active_seat(&self) -> Seat {
        self.active_seat
    }

    /// Returns the player holding the turn.
    pub fn active_player(&self) -> &PlayerState {
        self.player(self.active_seat)
    }

    /// Returns every played cell, player one's moves first.
    pub fn occupied_cells(&self) -> Vec<Cell> {
        self.players
            .iter()
            .flat_map(|p| p.movements().iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(n: i64) -> Cell {
        Cell::new(n).expect("valid cell")
    }

    #[test]
    fn test_starts_with_player_one() {
        let game = GameContext::with_names("Ana", "Luis");
        assert!(game.is_active());
        assert_eq!(game.phase(), GamePhase::PlayerOneTurn);
        assert_eq!(game.active_player().name(), "Ana");
        assert_eq!(game.game_result(), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameContext::with_names("Ana", "Luis");
        assert_eq!(game.record_turn(cell(5)).ok(), Some(GamePhase::PlayerTwoTurn));
        assert_eq!(game.record_turn(cell(1)).ok(), Some(GamePhase::PlayerOneTurn));
        assert_eq!(game.board().get(cell(5)), Some(Mark::X));
        assert_eq!(game.board().get(cell(1)), Some(Mark::O));
        assert_eq!(game.player(Seat::PlayerOne).movements(), &[cell(5)]);
        assert_eq!(game.player(Seat::PlayerTwo).movements(), &[cell(1)]);
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut game = GameContext::with_names("Ana", "Luis");
        game.record_turn(cell(5)).expect("first move");
        let before = game.board().clone();

        assert!(matches!(
            game.record_turn(cell(5)),
            Err(TurnError::CellOccupied { .. })
        ));
        assert_eq!(game.board(), &before);
        assert_eq!(game.phase(), GamePhase::PlayerTwoTurn);
    }

    #[test]
    fn test_win_sets_flag_and_stops() {
        let mut game = GameContext::with_names("Ana", "Luis");
        for n in [1, 4, 2, 5] {
            game.record_turn(cell(n)).expect("move");
        }
        assert_eq!(game.record_turn(cell(3)).ok(), Some(GamePhase::GameWon));
        assert!(!game.is_active());
        assert!(game.player(Seat::PlayerOne).is_winner());
        assert!(!game.player(Seat::PlayerTwo).is_winner());
        assert!(matches!(game.record_turn(cell(9)), Err(TurnError::GameOver)));
    }

    #[test]
    fn test_custom_predicate_is_used() {
        fn first_move_wins(moves: &[Cell]) -> bool {
            !moves.is_empty()
        }
        let mut game = GameContext::new(
            PlayerState::new(Seat::PlayerOne, Mark::X, "Ana"),
            PlayerState::new(Seat::PlayerTwo, Mark::O, "Luis"),
            first_move_wins,
        );
        assert_eq!(game.record_turn(cell(7)).ok(), Some(GamePhase::GameWon));
        assert_eq!(
            game.game_result(),
            Some(GameOutcome::Winner {
                name: "Ana".to_string()
            })
        );
    }

    #[test]
    fn test_outcome_messages() {
        let won = GameOutcome::Winner {
            name: "Ana".to_string(),
        };
        assert_eq!(won.to_string(), "the game has ended and the winner is Ana");
        assert_eq!(GameOutcome::Tie.to_string(), "Game ends in a tie");
    }
}
