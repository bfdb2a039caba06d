//! Request and response models for serialization.

use chrono::{DateTime, Utc};
use draughts_core::Player;
use draughts_engine::{Game, MoveOutcome, MoveRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored game.
pub type GameId = Uuid;

/// A move submitted by a client. Coordinates are raw so that off-board
/// values reach the validator and are reported as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from_row: i32,
    pub from_col: i32,
    pub to_row: i32,
    pub to_col: i32,
    pub player: Player,
}

impl MoveRequest {
    pub fn from(&self) -> (i32, i32) {
        (self.from_row, self.from_col)
    }

    pub fn to(&self) -> (i32, i32) {
        (self.to_row, self.to_col)
    }
}

/// A game as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: GameId,
    #[serde(flatten)]
    pub game: Game,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A history entry with the time it was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub game_id: GameId,
    #[serde(flatten)]
    pub record: MoveRecord,
    pub created_at: DateTime<Utc>,
}

/// Full state of a game: the game itself, its moves and whether it accepts
/// moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub game: GameSnapshot,
    pub moves: Vec<MoveEntry>,
    pub can_move: bool,
}

/// Response to an accepted move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub game: GameSnapshot,
    pub move_result: MoveOutcome,
}
