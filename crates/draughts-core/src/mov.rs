//! Move representation.

use crate::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ply: one diagonal step or one capturing jump.
///
/// A `Move` only records geometry; who makes it is supplied separately.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Move { from, to }
    }

    /// Builds a move from raw signed components, or `None` if either end is
    /// off the board.
    pub const fn from_components(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Option<Self> {
        match (Coord::new(from_row, from_col), Coord::new(to_row, to_col)) {
            (Some(from), Some(to)) => Some(Move { from, to }),
            _ => None,
        }
    }

    /// Returns `(Δrow, Δcol)`.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        self.from.delta(self.to)
    }

    /// Returns true when `|Δrow| == |Δcol|` and the move goes somewhere.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let (d_row, d_col) = self.delta();
        d_row != 0 && d_row.abs() == d_col.abs()
    }

    /// Number of rows travelled.
    #[inline]
    pub const fn distance(self) -> u32 {
        self.delta().0.unsigned_abs()
    }

    /// Returns true for a two-square diagonal move.
    #[inline]
    pub const fn is_jump(self) -> bool {
        self.is_diagonal() && self.distance() == 2
    }

    /// The square jumped over, for a two-square diagonal move.
    #[inline]
    pub const fn jumped(self) -> Option<Coord> {
        if self.is_jump() {
            self.from.midpoint(self.to)
        } else {
            None
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
