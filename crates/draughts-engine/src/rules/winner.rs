//! Terminal-state detection.

use crate::Board;
use draughts_core::Player;

/// Returns the winner if one side has no pieces left.
///
/// Only piece exhaustion ends a game; a player with pieces but no legal
/// move is not treated as having lost. If both sides are empty, Black is
/// reported as the winner since White's count is checked first.
pub fn check_winner(board: &Board) -> Option<Player> {
    let mut counts = [0usize; 2];
    for player in Player::ALL {
        counts[player.index()] = board.count(player);
    }

    if counts[Player::White.index()] == 0 {
        Some(Player::Black)
    } else if counts[Player::Black.index()] == 0 {
        Some(Player::White)
    } else {
        None
    }
}
