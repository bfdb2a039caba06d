//! Move legality, move application and win detection.
//!
//! Every function here is a pure transformation of the values it is given:
//! nothing holds state between calls. A single call handles a single ply;
//! captures are not forced and jumps do not chain.

mod apply;
mod validate;
mod winner;

pub use apply::{apply, apply_move, try_apply_move, Applied};
pub use validate::{is_valid_move, validate, Verdict};
pub use winner::check_winner;

use thiserror::Error;

/// Why a proposed move was rejected.
///
/// Checks run in declaration order; the first one that fails decides the
/// reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("source or destination is off the board, or they are the same square")]
    OutOfBounds,

    #[error("the mover has no piece on the source square")]
    NoOwnedPieceAtSource,

    #[error("the destination square is occupied")]
    DestinationOccupied,

    #[error("the move is not diagonal")]
    NotDiagonal,

    #[error("a man cannot move backward")]
    WrongDirectionForRank,

    #[error("a move must travel one square, or two when jumping")]
    InvalidDistance,

    #[error("a jump must pass over an opposing piece")]
    NoCaptureTarget,
}
