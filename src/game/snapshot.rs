//! Serializable record of a game.

use super::context::{GameContext, GameOutcome, GamePhase};
use super::player::PlayerState;
use super::types::{Board, Cell, Mark, Seat};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::instrument;

/// What a snapshot keeps of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct PlayerRecord {
    seat: Seat,
    name: String,
    mark: Mark,
    movements: Vec<Cell>,
    winner: bool,
}

impl From<&PlayerState> for PlayerRecord {
    fn from(player: &PlayerState) -> Self {
        Self::new(
            player.seat(),
            player.name().to_string(),
            player.mark(),
            player.movements().to_vec(),
            player.is_winner(),
        )
    }
}

/// Point-in-time copy of a [`GameContext`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSnapshot {
    board: Board,
    players: Vec<PlayerRecord>,
    phase: GamePhase,
    outcome: Option<GameOutcome>,
}

impl From<&GameContext> for GameSnapshot {
    fn from(game: &GameContext) -> Self {
        Self {
            board: game.board().clone(),
            players: game.players().iter().map(PlayerRecord::from).collect(),
            phase: game.phase(),
            outcome: game.game_result(),
        }
    }
}

impl GameSnapshot {
    /// Appends this snapshot as one JSON line.
    #[instrument(skip_all, fields(phase = %self.phase))]
    pub fn write_json_line<W: Write>(&self, mut writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer(&mut writer, self)?;
        writer.write_all(b"\n").map_err(serde_json::Error::io)?;
        Ok(())
    }
}

impl GameContext {
    /// Captures the current state for serialization.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}
