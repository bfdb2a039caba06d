//! Core types for draughts.
//!
//! This crate provides the fundamental types used across the rule engine:
//! - [`Piece`], [`Rank`] and [`Player`] for piece representation
//! - [`Coord`] for board coordinates
//! - [`Move`] for single-ply moves
//! - Text notation for whole boards

mod coord;
mod mov;
mod notation;
mod piece;
mod player;

pub use coord::{Coord, BOARD_SIZE};
pub use mov::Move;
pub use notation::{parse_rows, write_rows, NotationError};
pub use piece::{Piece, Rank};
pub use player::Player;
