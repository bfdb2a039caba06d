//! Game session state machine.
//!
//! The [`Game`] struct is the aggregate a session service stores per game:
//! - the current board and whose turn it is
//! - the session status (waiting, playing, finished) and the winner
//! - capture counters and the seat labels of both players
//! - the history of accepted moves
//!
//! Each accepted move runs validation, application and win detection in
//! sequence and commits all of their effects together; a rejected move
//! leaves the game exactly as it was.

use crate::rules::{self, Rejection};
use crate::Board;
use draughts_core::{Coord, Move, Player};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session status of a game. Only ever advances in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// One seat filled, waiting for an opponent to join.
    Waiting,
    /// Both seats filled; moves are accepted.
    Playing,
    /// A player has run out of pieces; the game is frozen.
    Finished,
}

/// Error type for game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A move was submitted while the game is not being played.
    #[error("game is not in playing state")]
    GameNotPlaying,
    /// The mover does not hold the current turn.
    #[error("not your turn")]
    NotYourTurn,
    /// A join was attempted on a game that is not waiting for a player.
    #[error("game is already full")]
    SeatAlreadyFilled,
    /// The move failed a legality check.
    #[error("illegal move: {0}")]
    IllegalMove(#[from] Rejection),
}

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    pub player: Player,
    /// Square of the captured piece, for a jump.
    pub captured: Option<Coord>,
    pub promoted: bool,
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub captured: Option<Coord>,
    pub promoted: bool,
    pub winner: Option<Player>,
    /// The player to move next, or `None` once the game is finished.
    pub next_turn: Option<Player>,
}

/// A draughts game between two seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_turn: Player,
    status: GameStatus,
    winner: Option<Player>,
    /// White pieces removed from the board.
    white_captured: u32,
    /// Black pieces removed from the board.
    black_captured: u32,
    player_white: Option<String>,
    player_black: Option<String>,
    history: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Game {
    /// Creates a game with the starting layout, White's seat filled and
    /// White to move. The game waits for Black to [`join`](Game::join).
    pub fn new(player_white: Option<String>) -> Self {
        Game {
            board: Board::initial(),
            current_turn: Player::White,
            status: GameStatus::Waiting,
            winner: None,
            white_captured: 0,
            black_captured: 0,
            player_white,
            player_black: None,
            history: Vec::new(),
        }
    }

    /// Creates a game already in play from a custom board.
    ///
    /// The game is finished immediately if one side has no pieces.
    pub fn from_board(board: Board, current_turn: Player) -> Self {
        let winner = rules::check_winner(&board);
        Game {
            board,
            current_turn,
            status: if winner.is_some() {
                GameStatus::Finished
            } else {
                GameStatus::Playing
            },
            winner,
            white_captured: 0,
            black_captured: 0,
            player_white: None,
            player_black: None,
            history: Vec::new(),
        }
    }

    /// Fills Black's seat and starts play.
    pub fn join(&mut self, player_black: Option<String>) -> Result<(), GameError> {
        if self.status != GameStatus::Waiting {
            return Err(GameError::SeatAlreadyFilled);
        }
        self.player_black = player_black;
        self.status = GameStatus::Playing;
        tracing::info!(
            white = ?self.player_white,
            black = ?self.player_black,
            "game started"
        );
        Ok(())
    }

    /// Plays one ply for `mover` from `from` to `to`.
    ///
    /// Session guards run first (`GameNotPlaying`, then `NotYourTurn`), then
    /// the legality checks. On success the board, counters, history, turn
    /// and status are all updated; on error nothing changes.
    pub fn make_move(
        &mut self,
        mover: Player,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<MoveOutcome, GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::GameNotPlaying);
        }
        if mover != self.current_turn {
            return Err(GameError::NotYourTurn);
        }

        let verdict = rules::validate(&self.board, from, to, mover).map_err(|reason| {
            tracing::debug!(%mover, ?from, ?to, %reason, "move rejected");
            reason
        })?;
        let applied = rules::apply(&self.board, &verdict);
        let winner = rules::check_winner(&applied.board);

        self.board = applied.board;
        if applied.captured.is_some() {
            match mover.opponent() {
                Player::White => self.white_captured += 1,
                Player::Black => self.black_captured += 1,
            }
        }
        self.history.push(MoveRecord {
            mv: verdict.mv(),
            player: mover,
            captured: applied.captured,
            promoted: applied.promoted,
        });

        let next_turn = match winner {
            Some(w) => {
                self.status = GameStatus::Finished;
                self.winner = Some(w);
                tracing::info!(winner = %w, plies = self.history.len(), "game finished");
                None
            }
            None => {
                self.current_turn = mover.opponent();
                Some(self.current_turn)
            }
        };

        Ok(MoveOutcome {
            captured: applied.captured,
            promoted: applied.promoted,
            winner,
            next_turn,
        })
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the last mover once the game is finished).
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns true while moves are accepted.
    pub fn can_move(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Number of white pieces captured so far.
    pub fn white_captured(&self) -> u32 {
        self.white_captured
    }

    /// Number of black pieces captured so far.
    pub fn black_captured(&self) -> u32 {
        self.black_captured
    }

    /// Returns the label of the player holding `seat`, if one was given.
    pub fn player_name(&self, seat: Player) -> Option<&str> {
        match seat {
            Player::White => self.player_white.as_deref(),
            Player::Black => self.player_black.as_deref(),
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the number of plies played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draughts_core::Piece;

    fn playing() -> Game {
        let mut game = Game::new(Some("alice".into()));
        game.join(Some("bob".into())).unwrap();
        game
    }

    fn at(row: i32, col: i32) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn new_game_waits_for_black() {
        let game = Game::new(Some("alice".into()));
        assert_eq!(game.status(), GameStatus::Waiting);
        assert_eq!(game.current_turn(), Player::White);
        assert_eq!(game.player_name(Player::White), Some("alice"));
        assert_eq!(game.player_name(Player::Black), None);
        assert!(!game.can_move());
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn join_starts_play() {
        let game = playing();
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.player_name(Player::Black), Some("bob"));
        assert!(game.can_move());
    }

    #[test]
    fn second_join_is_rejected() {
        let mut game = playing();
        assert_eq!(game.join(Some("carol".into())), Err(GameError::SeatAlreadyFilled));
        assert_eq!(game.player_name(Player::Black), Some("bob"));
    }

    #[test]
    fn cannot_move_while_waiting() {
        let mut game = Game::new(None);
        assert_eq!(
            game.make_move(Player::White, (2, 2), (3, 3)),
            Err(GameError::GameNotPlaying)
        );
    }

    #[test]
    fn turn_guard_runs_before_validation() {
        let mut game = playing();
        // Illegal as well, but the turn guard decides first.
        assert_eq!(
            game.make_move(Player::Black, (0, 0), (0, 1)),
            Err(GameError::NotYourTurn)
        );
    }

    #[test]
    fn accepted_move_flips_turn() {
        let mut game = playing();
        let outcome = game.make_move(Player::White, (2, 2), (3, 3)).unwrap();
        assert_eq!(outcome.next_turn, Some(Player::Black));
        assert_eq!(outcome.winner, None);
        assert_eq!(game.current_turn(), Player::Black);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.history()[0].mv.to, at(3, 3));
        assert_eq!(game.history()[0].player, Player::White);
    }

    #[test]
    fn rejected_move_changes_nothing() {
        let mut game = playing();
        let before = game.clone();
        assert_eq!(
            game.make_move(Player::White, (2, 2), (3, 2)),
            Err(GameError::IllegalMove(Rejection::NotDiagonal))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn capture_counts_against_the_captured_side() {
        let board = Board::from_notation(
            "......../......../......../...w..../....b.../......../......b./........",
        )
        .unwrap();
        let mut game = Game::from_board(board, Player::White);
        let outcome = game.make_move(Player::White, (3, 3), (5, 5)).unwrap();
        assert_eq!(outcome.captured, Some(at(4, 4)));
        assert_eq!(game.black_captured(), 1);
        assert_eq!(game.white_captured(), 0);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn last_capture_finishes_game() {
        let board = Board::from_notation(
            "......../......../......../...w..../....b.../......../......../........",
        )
        .unwrap();
        let mut game = Game::from_board(board, Player::White);
        let outcome = game.make_move(Player::White, (3, 3), (5, 5)).unwrap();
        assert_eq!(outcome.winner, Some(Player::White));
        assert_eq!(outcome.next_turn, None);
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.winner(), Some(Player::White));
        // Turn is not advanced on the final move.
        assert_eq!(game.current_turn(), Player::White);
    }

    #[test]
    fn finished_game_is_frozen() {
        let board = Board::from_notation(
            "......../......../......../...w..../....b.../......../......../........",
        )
        .unwrap();
        let mut game = Game::from_board(board, Player::White);
        game.make_move(Player::White, (3, 3), (5, 5)).unwrap();
        let before = game.clone();
        assert_eq!(
            game.make_move(Player::White, (5, 5), (6, 6)),
            Err(GameError::GameNotPlaying)
        );
        assert_eq!(game.join(None), Err(GameError::SeatAlreadyFilled));
        assert_eq!(game, before);
    }

    #[test]
    fn from_board_detects_finished_position() {
        let board = Board::with_pieces([(at(3, 3), Piece::man(Player::White))]).unwrap();
        let game = Game::from_board(board, Player::Black);
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Player::White));
    }

    #[test]
    fn promotion_is_recorded() {
        let board = Board::from_notation(
            "......../......../......../......../......../......../....w.../.b......",
        )
        .unwrap();
        let mut game = Game::from_board(board, Player::White);
        let outcome = game.make_move(Player::White, (6, 4), (7, 5)).unwrap();
        assert!(outcome.promoted);
        assert!(game.history()[0].promoted);
        assert_eq!(game.board().piece_at(at(7, 5)), Some(Piece::king(Player::White)));
    }

    #[test]
    fn serde_round_trip() {
        let mut game = playing();
        game.make_move(Player::White, (2, 2), (3, 3)).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        assert!(json.contains("\"status\":\"playing\""));
        assert!(json.contains("\"current_turn\":\"black\""));
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }
}
