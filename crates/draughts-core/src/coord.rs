//! Board coordinate representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the board, addressed by `(row, col)` with both in `0..8`.
///
/// A `Coord` is always in bounds; raw input is checked with [`Coord::new`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate from signed components, or `None` when either
    /// lies outside the board.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Option<Self> {
        if row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32 {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a coordinate from a square index (0-63, row-major).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Coord {
                row: index / BOARD_SIZE,
                col: index % BOARD_SIZE,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    /// Returns true for the playable (dark) squares, where `row + col` is even.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Returns the coordinate shifted by `(d_row, d_col)`, if still on the board.
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        match (
            (self.row as i32).checked_add(d_row),
            (self.col as i32).checked_add(d_col),
        ) {
            (Some(row), Some(col)) => Self::new(row, col),
            _ => None,
        }
    }

    /// Returns `(to.row - self.row, to.col - self.col)`.
    #[inline]
    pub const fn delta(self, to: Coord) -> (i32, i32) {
        (
            to.row as i32 - self.row as i32,
            to.col as i32 - self.col as i32,
        )
    }

    /// Returns the square halfway between `self` and `to`, when both
    /// components of the distance are even.
    pub const fn midpoint(self, to: Coord) -> Option<Self> {
        let (d_row, d_col) = self.delta(to);
        if d_row % 2 != 0 || d_col % 2 != 0 {
            return None;
        }
        self.offset(d_row / 2, d_col / 2)
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Coord::from_index)
    }
}

impl TryFrom<(i32, i32)> for Coord {
    type Error = String;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Coord::new(row, col).ok_or_else(|| format!("coordinate ({row}, {col}) is off the board"))
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.row as i32, c.col as i32)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord{}", self)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
