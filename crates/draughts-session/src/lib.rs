//! In-memory draughts game sessions.
//!
//! [`SessionStore`] is the collaborator around the rule engine: it keeps
//! [`Game`](draughts_engine::Game) aggregates by identifier, seats players,
//! serializes moves per game and records when each move was accepted.
//! Transport and durable storage are left to the embedding application.
//!
//! # Example
//!
//! ```
//! use draughts_core::Player;
//! use draughts_session::{MoveRequest, SessionStore};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = SessionStore::default();
//! let game = store.create_game(Some("alice")).await.unwrap();
//! store.join_game(game.id, Some("bob")).await.unwrap();
//!
//! let request = MoveRequest { from_row: 2, from_col: 2, to_row: 3, to_col: 3, player: Player::White };
//! let response = store.submit_move(game.id, request).await.unwrap();
//! assert_eq!(response.move_result.next_turn, Some(Player::Black));
//! # }
//! ```

mod config;
mod models;
mod store;

pub use config::{ConfigError, SessionConfig};
pub use models::{GameId, GameSnapshot, GameState, MoveEntry, MoveRequest, MoveResponse};
pub use store::{SessionError, SessionStore};
