//! Player representation.

use serde::{Deserialize, Serialize};

/// The two players of a draughts game.
///
/// White always moves first. Serialized in lowercase (`"white"`, `"black"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Both players, white first.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// Returns the opponent.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row direction a man of this player advances in
    /// (+1 for White, -1 for Black).
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Returns the row this player's men are promoted on
    /// (the opponent's back rank).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }

    /// Returns the rows holding this player's men in the starting layout.
    #[inline]
    pub const fn home_rows(self) -> [u8; 3] {
        match self {
            Player::White => [0, 1, 2],
            Player::Black => [5, 6, 7],
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "white"),
            Player::Black => write!(f, "black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
    }

    #[test]
    fn forward_points_at_promotion_row() {
        for player in Player::ALL {
            let home = player.home_rows()[1] as i32;
            let toward = player.promotion_row() as i32 - home;
            assert_eq!(toward.signum(), player.forward());
        }
    }

    #[test]
    fn promotion_row_is_opponent_home_edge() {
        assert!(Player::Black.home_rows().contains(&Player::White.promotion_row()));
        assert!(Player::White.home_rows().contains(&Player::Black.promotion_row()));
    }

    #[test]
    fn display() {
        assert_eq!(Player::White.to_string(), "white");
        assert_eq!(Player::Black.to_string(), "black");
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Player::Black).unwrap(), "\"black\"");
        let p: Player = serde_json::from_str("\"white\"").unwrap();
        assert_eq!(p, Player::White);
    }
}
