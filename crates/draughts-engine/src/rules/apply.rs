//! Applying validated moves.

use super::{validate, Rejection, Verdict};
use crate::Board;
use draughts_core::{Coord, Player};

/// The result of applying one move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// The board after the move.
    pub board: Board,
    /// The square vacated by the captured piece, for a jump.
    pub captured: Option<Coord>,
    /// Whether the moved man was crowned on this move.
    pub promoted: bool,
}

impl Applied {
    /// Number of pieces removed by this move (0 or 1).
    #[inline]
    pub fn captured_count(&self) -> u32 {
        u32::from(self.captured.is_some())
    }
}

/// Applies a validated move to `board`, returning the new board.
///
/// `board` must be the board the verdict was produced from.
pub fn apply(board: &Board, verdict: &Verdict) -> Applied {
    let mv = verdict.mv();
    let mut next = board.clone();

    let moving = next.put(mv.from, None);
    debug_assert_eq!(moving, Some(verdict.piece()), "verdict applied to a different board");

    let captured = verdict.captured();
    if let Some(over) = captured {
        let removed = next.put(over, None);
        debug_assert_eq!(
            removed.map(|p| p.owner),
            Some(verdict.mover().opponent()),
            "verdict applied to a different board"
        );
    }

    let mut piece = verdict.piece();
    let promoted = !piece.is_king() && mv.to.row() == piece.owner.promotion_row();
    if promoted {
        piece = piece.crowned();
    }
    next.put(mv.to, Some(piece));

    Applied {
        board: next,
        captured,
        promoted,
    }
}

/// Validates and applies a move in one call.
pub fn try_apply_move(
    board: &Board,
    from: (i32, i32),
    to: (i32, i32),
    mover: Player,
) -> Result<Applied, Rejection> {
    validate(board, from, to, mover).map(|verdict| apply(board, &verdict))
}

/// Applies a move the caller has already validated.
///
/// # Panics
///
/// Panics if the move is not legal. Callers must check it with
/// [`validate`](super::validate) first, or use [`try_apply_move`].
pub fn apply_move(board: &Board, from: (i32, i32), to: (i32, i32), mover: Player) -> Applied {
    match try_apply_move(board, from, to, mover) {
        Ok(applied) => applied,
        Err(reason) => panic!(
            "apply_move called with an illegal move {:?} -> {:?} for {}: {}",
            from, to, mover, reason
        ),
    }
}
