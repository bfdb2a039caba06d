//! Rule engine for 8×8 draughts.
//!
//! This crate provides:
//! - [`Board`] - the grid of pieces, starting layout and stored encoding
//! - [`rules`] - single-ply validation, move application and win detection
//! - [`Game`] - the turn state machine a session service stores per game
//!
//! # Conventions
//!
//! Pieces live on the squares where `row + col` is even. White starts on
//! rows 0-2, moves toward row 7 and moves first; Black starts on rows 5-7
//! and moves toward row 0.
//!
//! # Example
//!
//! ```
//! use draughts_core::Player;
//! use draughts_engine::{rules, Board, Game};
//!
//! // Stateless rule functions
//! let board = Board::initial();
//! assert!(rules::is_valid_move(&board, (2, 2), (3, 3), Player::White));
//! let applied = rules::apply_move(&board, (2, 2), (3, 3), Player::White);
//! assert_eq!(rules::check_winner(&applied.board), None);
//!
//! // Full game management
//! let mut game = Game::new(Some("alice".to_string()));
//! game.join(Some("bob".to_string())).unwrap();
//! let outcome = game.make_move(Player::White, (2, 2), (3, 3)).unwrap();
//! assert_eq!(outcome.next_turn, Some(Player::Black));
//! ```

mod board;
mod game;
pub mod rules;

pub use board::{Board, BoardError, Grid};
pub use game::{Game, GameError, GameStatus, MoveOutcome, MoveRecord};
pub use rules::{
    apply_move, check_winner, is_valid_move, try_apply_move, validate, Applied, Rejection, Verdict,
};
