//! Single-ply legality checks.

use super::Rejection;
use crate::Board;
use draughts_core::{Coord, Move, Piece, Player, Rank};

/// A move that passed every legality check on a given board.
///
/// Only [`validate`] builds one, so holding a `Verdict` is proof the move was
/// checked. It carries what the applier needs without recomputing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    mv: Move,
    piece: Piece,
    captured: Option<Coord>,
}

impl Verdict {
    /// The validated move.
    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// The piece being moved.
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The player making the move.
    #[inline]
    pub fn mover(&self) -> Player {
        self.piece.owner
    }

    /// The square of the piece that will be captured, for a jump.
    #[inline]
    pub fn captured(&self) -> Option<Coord> {
        self.captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Decides whether moving `from` → `to` is a legal single ply for `mover`.
///
/// Coordinates are raw `(row, col)` pairs so off-board input can be reported
/// as [`Rejection::OutOfBounds`] rather than failing earlier.
pub fn validate(
    board: &Board,
    from: (i32, i32),
    to: (i32, i32),
    mover: Player,
) -> Result<Verdict, Rejection> {
    let mv = match Move::from_components(from.0, from.1, to.0, to.1) {
        Some(mv) if mv.from != mv.to => mv,
        _ => return Err(Rejection::OutOfBounds),
    };

    let piece = match board.piece_at(mv.from) {
        Some(p) if p.owner == mover => p,
        _ => return Err(Rejection::NoOwnedPieceAtSource),
    };

    if !board.is_empty_at(mv.to) {
        return Err(Rejection::DestinationOccupied);
    }

    if !mv.is_diagonal() {
        return Err(Rejection::NotDiagonal);
    }

    let (d_row, _) = mv.delta();
    if piece.rank == Rank::Man && d_row.signum() != mover.forward() {
        return Err(Rejection::WrongDirectionForRank);
    }

    let captured = match mv.distance() {
        1 => None,
        2 => {
            let over = mv.jumped().ok_or(Rejection::InvalidDistance)?;
            match board.owner_at(over) {
                Some(owner) if owner == mover.opponent() => Some(over),
                _ => return Err(Rejection::NoCaptureTarget),
            }
        }
        _ => return Err(Rejection::InvalidDistance),
    };

    Ok(Verdict {
        mv,
        piece,
        captured,
    })
}

/// Returns true if [`validate`] accepts the move.
pub fn is_valid_move(board: &Board, from: (i32, i32), to: (i32, i32), mover: Player) -> bool {
    validate(board, from, to, mover).is_ok()
}
