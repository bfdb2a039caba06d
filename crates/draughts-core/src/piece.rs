//! Draughts piece representation.

use crate::Player;
use serde::{Deserialize, Serialize};

/// The rank of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Rank {
    /// Moves diagonally forward only.
    Man = 1,
    /// Promoted piece, moves diagonally in either direction.
    King = 2,
}

/// A piece on the board: an owner and a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub rank: Rank,
}

impl Piece {
    #[inline]
    pub const fn new(owner: Player, rank: Rank) -> Self {
        Piece { owner, rank }
    }

    #[inline]
    pub const fn man(owner: Player) -> Self {
        Self::new(owner, Rank::Man)
    }

    #[inline]
    pub const fn king(owner: Player) -> Self {
        Self::new(owner, Rank::King)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Returns this piece with its rank raised to king.
    #[inline]
    pub const fn crowned(self) -> Self {
        Self::king(self.owner)
    }

    /// Returns the stored cell code: `1`/`2` for white man/king,
    /// `-1`/`-2` for black man/king.
    pub const fn to_code(self) -> i8 {
        let magnitude = self.rank as i8;
        match self.owner {
            Player::White => magnitude,
            Player::Black => -magnitude,
        }
    }

    /// Decodes a stored cell code. `0` is an empty cell (`Some(None)`);
    /// anything outside `-2..=2` is rejected.
    pub const fn from_code(code: i8) -> Option<Option<Piece>> {
        match code {
            0 => Some(None),
            1 => Some(Some(Piece::man(Player::White))),
            2 => Some(Some(Piece::king(Player::White))),
            -1 => Some(Some(Piece::man(Player::Black))),
            -2 => Some(Some(Piece::king(Player::Black))),
            _ => None,
        }
    }

    /// Returns the notation character: `w`/`W` for white man/king,
    /// `b`/`B` for black man/king.
    pub const fn to_char(self) -> char {
        let c = match self.owner {
            Player::White => 'w',
            Player::Black => 'b',
        };
        match self.rank {
            Rank::Man => c,
            Rank::King => c.to_ascii_uppercase(),
        }
    }

    /// Parses a notation character.
    pub const fn from_char(c: char) -> Option<Piece> {
        let rank = if c.is_ascii_uppercase() {
            Rank::King
        } else {
            Rank::Man
        };
        let owner = match c.to_ascii_lowercase() {
            'w' => Player::White,
            'b' => Player::Black,
            _ => return None,
        };
        Some(Piece::new(owner, rank))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self.rank {
            Rank::Man => "man",
            Rank::King => "king",
        };
        write!(f, "{} {}", self.owner, rank)
    }
}
