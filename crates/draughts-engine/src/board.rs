//! Board state: an 8×8 grid of optional pieces.

use draughts_core::{parse_rows, write_rows, Coord, NotationError, Piece, Player, Rank, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const SIZE: usize = BOARD_SIZE as usize;

/// Stored form of a board: one signed code per cell, see [`Piece::to_code`].
pub type Grid = [[i8; SIZE]; SIZE];

/// Errors raised when reading or building a board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("square {0} is a light square and cannot hold a piece")]
    LightSquare(Coord),

    #[error("invalid cell code {code} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, code: i8 },

    #[error(transparent)]
    Notation(#[from] NotationError),
}

/// A draughts board.
///
/// Pieces only ever sit on dark squares; every constructor enforces this.
/// Serialized as the signed-code [`Grid`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Grid", into = "Grid")]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Creates the starting layout: twelve men per side on the dark squares
    /// of the three rows nearest their own edge.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for player in Player::ALL {
            for row in player.home_rows() {
                for col in 0..BOARD_SIZE {
                    if let Some(c) = Coord::new(row as i32, col as i32).filter(|c| c.is_dark()) {
                        board.put(c, Some(Piece::man(player)));
                    }
                }
            }
        }
        board
    }

    /// Builds a board from `(coord, piece)` placements.
    pub fn with_pieces<I>(pieces: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Coord, Piece)>,
    {
        let mut board = Board::empty();
        for (coord, piece) in pieces {
            board.set(coord, Some(piece))?;
        }
        Ok(board)
    }

    /// Decodes the stored grid form.
    pub fn from_grid(grid: &Grid) -> Result<Self, BoardError> {
        let mut board = Board::empty();
        for (row, cells) in grid.iter().enumerate() {
            for (col, &code) in cells.iter().enumerate() {
                let piece = Piece::from_code(code).ok_or(BoardError::InvalidCell { row, col, code })?;
                if piece.is_some() {
                    let coord = Coord::new(row as i32, col as i32).ok_or(BoardError::OutOfBounds {
                        row: row as i32,
                        col: col as i32,
                    })?;
                    board.set(coord, piece)?;
                }
            }
        }
        Ok(board)
    }

    /// Encodes the board as its stored grid form.
    pub fn to_grid(&self) -> Grid {
        let mut grid = [[0; SIZE]; SIZE];
        for (out, cells) in grid.iter_mut().zip(self.cells.iter()) {
            for (code, cell) in out.iter_mut().zip(cells.iter()) {
                *code = cell.map_or(0, Piece::to_code);
            }
        }
        grid
    }

    /// Parses board notation (see [`draughts_core::parse_rows`]).
    pub fn from_notation(notation: &str) -> Result<Self, BoardError> {
        let grid = parse_rows(notation)?;
        let mut board = Board::empty();
        for coord in Coord::all() {
            board.set(coord, grid[coord.row() as usize][coord.col() as usize])?;
        }
        Ok(board)
    }

    /// Writes the board in text notation.
    pub fn to_notation(&self) -> String {
        write_rows(&self.cells)
    }

    /// Returns the piece on `coord`, if any.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.cells[coord.row() as usize][coord.col() as usize]
    }

    /// Returns the piece on raw `(row, col)`, failing if it is off the board.
    pub fn piece_at_checked(&self, row: i32, col: i32) -> Result<Option<Piece>, BoardError> {
        Coord::new(row, col)
            .map(|c| self.piece_at(c))
            .ok_or(BoardError::OutOfBounds { row, col })
    }

    #[inline]
    pub fn owner_at(&self, coord: Coord) -> Option<Player> {
        self.piece_at(coord).map(|p| p.owner)
    }

    #[inline]
    pub fn rank_at(&self, coord: Coord) -> Option<Rank> {
        self.piece_at(coord).map(|p| p.rank)
    }

    #[inline]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_none()
    }

    /// Places or clears a square, returning what was there before.
    pub fn set(&mut self, coord: Coord, piece: Option<Piece>) -> Result<Option<Piece>, BoardError> {
        if piece.is_some() && !coord.is_dark() {
            return Err(BoardError::LightSquare(coord));
        }
        Ok(self.put(coord, piece))
    }

    /// Unchecked write used by the move applier, whose diagonal moves never
    /// leave the dark squares.
    #[inline]
    pub(crate) fn put(&mut self, coord: Coord, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[coord.row() as usize][coord.col() as usize], piece)
    }

    /// Iterates over `player`'s pieces in row-major order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(move |c| {
            self.piece_at(c)
                .filter(|p| p.owner == player)
                .map(|p| (c, p))
        })
    }

    /// Counts `player`'s pieces.
    pub fn count(&self, player: Player) -> usize {
        self.pieces(player).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl TryFrom<Grid> for Board {
    type Error = BoardError;

    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        Board::from_grid(&grid)
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Self {
        board.to_grid()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_notation())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", r)?;
            for cell in cells {
                write!(f, "{}", cell.map_or('.', Piece::to_char))?;
            }
            writeln!(f)?;
        }
        write!(f, "  01234567")
    }
}
