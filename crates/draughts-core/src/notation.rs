//! Text notation for whole boards.
//!
//! A board is written as eight `/`-separated rows, row 0 first. Each row has
//! exactly eight characters: `.` for an empty square, `w`/`W` for a white
//! man/king and `b`/`B` for a black man/king.
//!
//! ```text
//! w.w.w.w./.w.w.w.w/w.w.w.w./......../......../.b.b.b.b/b.b.b.b./.b.b.b.b
//! ```

use crate::{Piece, BOARD_SIZE};
use thiserror::Error;

const SIZE: usize = BOARD_SIZE as usize;

/// Errors that can occur when parsing board notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid board notation: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid board notation: row {row} has {len} squares, expected 8")]
    InvalidRowLength { row: usize, len: usize },

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { row: usize, ch: char },
}

/// Parses board notation into a row-major grid of cells.
pub fn parse_rows(notation: &str) -> Result<[[Option<Piece>; SIZE]; SIZE], NotationError> {
    let rows: Vec<&str> = notation.trim().split('/').collect();
    if rows.len() != SIZE {
        return Err(NotationError::InvalidRowCount(rows.len()));
    }

    let mut grid = [[None; SIZE]; SIZE];
    for (r, text) in rows.iter().enumerate() {
        let len = text.chars().count();
        if len != SIZE {
            return Err(NotationError::InvalidRowLength { row: r, len });
        }
        for (c, ch) in text.chars().enumerate() {
            grid[r][c] = match ch {
                '.' => None,
                other => Some(
                    Piece::from_char(other)
                        .ok_or(NotationError::InvalidCharacter { row: r, ch: other })?,
                ),
            };
        }
    }
    Ok(grid)
}

/// Writes a row-major grid of cells as board notation.
pub fn write_rows(grid: &[[Option<Piece>; SIZE]; SIZE]) -> String {
    let mut out = String::with_capacity(SIZE * (SIZE + 1));
    for (r, row) in grid.iter().enumerate() {
        if r > 0 {
            out.push('/');
        }
        out.extend(row.iter().map(|cell| cell.map_or('.', Piece::to_char)));
    }
    out
}
