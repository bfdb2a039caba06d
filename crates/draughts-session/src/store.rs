//! In-memory game storage with per-game move serialization.
//!
//! Each game sits behind its own mutex. A move holds that lock from the
//! moment the stored game is read until the result is written back, so two
//! submissions racing against the same game are applied one after the other
//! and the second one sees the first one's result.

use crate::config::SessionConfig;
use crate::models::{GameId, GameSnapshot, GameState, MoveEntry, MoveRequest, MoveResponse};
use chrono::{DateTime, Utc};
use draughts_engine::{Game, GameError};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// Errors returned by [`SessionStore`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Game not found: {0}")]
    GameNotFound(GameId),

    #[error("Too many games: limit is {0}")]
    TooManyGames(usize),

    #[error("Invalid player name: {0}")]
    InvalidPlayerName(String),

    #[error(transparent)]
    Game(#[from] GameError),
}

struct GameRecord {
    id: GameId,
    game: Game,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    /// Acceptance time of each entry in `game.history()`.
    move_times: Vec<DateTime<Utc>>,
}

impl GameRecord {
    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            game: self.game.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

type SharedRecord = Arc<Mutex<GameRecord>>;

/// Owns every game and hands out snapshots of them.
pub struct SessionStore {
    config: SessionConfig,
    games: RwLock<HashMap<GameId, SharedRecord>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl SessionStore {
    pub fn new(config: SessionConfig) -> Self {
        SessionStore {
            config,
            games: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored games.
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }

    /// Creates a game with the starting layout and `player_name` in White's
    /// seat. The game waits for a second player.
    pub async fn create_game(&self, player_name: Option<&str>) -> Result<GameSnapshot, SessionError> {
        let player_white = self.check_name(player_name)?;

        let mut games = self.games.write().await;
        if games.len() >= self.config.max_games && !evict_finished(&mut games) {
            return Err(SessionError::TooManyGames(self.config.max_games));
        }

        let now = Utc::now();
        let record = GameRecord {
            id: Uuid::new_v4(),
            game: Game::new(player_white),
            created_at: now,
            updated_at: now,
            move_times: Vec::new(),
        };
        let snapshot = record.snapshot();
        games.insert(record.id, Arc::new(Mutex::new(record)));

        tracing::info!(game_id = %snapshot.id, "game created");
        Ok(snapshot)
    }

    /// Seats `player_name` as Black and starts the game.
    pub async fn join_game(
        &self,
        id: GameId,
        player_name: Option<&str>,
    ) -> Result<GameSnapshot, SessionError> {
        let player_black = self.check_name(player_name)?;
        let shared = self.record(id).await?;
        let mut record = shared.lock().await;

        record.game.join(player_black)?;
        record.updated_at = Utc::now();

        tracing::info!(game_id = %id, "player joined");
        Ok(record.snapshot())
    }

    /// Plays a submitted move against the stored game.
    pub async fn submit_move(
        &self,
        id: GameId,
        request: MoveRequest,
    ) -> Result<MoveResponse, SessionError> {
        let shared = self.record(id).await?;
        let mut record = shared.lock().await;

        let outcome = match record.game.make_move(request.player, request.from(), request.to()) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(game_id = %id, error = %e, "move refused");
                return Err(e.into());
            }
        };

        let now = Utc::now();
        record.updated_at = now;
        record.move_times.push(now);

        if let Some(winner) = outcome.winner {
            tracing::info!(game_id = %id, %winner, "game over");
        }

        Ok(MoveResponse {
            game: record.snapshot(),
            move_result: outcome,
        })
    }

    /// Returns the game together with its move history.
    pub async fn game_state(&self, id: GameId) -> Result<GameState, SessionError> {
        let shared = self.record(id).await?;
        let record = shared.lock().await;

        let moves = record
            .game
            .history()
            .iter()
            .zip(record.move_times.iter())
            .map(|(entry, &created_at)| MoveEntry {
                game_id: id,
                record: *entry,
                created_at,
            })
            .collect();

        Ok(GameState {
            game: record.snapshot(),
            moves,
            can_move: record.game.can_move(),
        })
    }

    /// Drops a game from the store.
    pub async fn remove_game(&self, id: GameId) -> Result<(), SessionError> {
        self.games
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(SessionError::GameNotFound(id))
    }

    async fn record(&self, id: GameId) -> Result<SharedRecord, SessionError> {
        self.games
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::GameNotFound(id))
    }

    /// Trims a seat label; blank labels become `None`.
    fn check_name(&self, name: Option<&str>) -> Result<Option<String>, SessionError> {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            return Ok(None);
        };
        if name.chars().count() > self.config.max_player_name_len {
            return Err(SessionError::InvalidPlayerName(format!(
                "longer than {} characters",
                self.config.max_player_name_len
            )));
        }
        Ok(Some(name.to_string()))
    }
}

/// Drops the finished game with the oldest `updated_at`, returning whether
/// a slot was freed. Games whose lock is held are in use and never finished.
fn evict_finished(games: &mut HashMap<GameId, SharedRecord>) -> bool {
    let oldest = games
        .iter()
        .filter_map(|(id, shared)| {
            let record = shared.try_lock().ok()?;
            record.game.is_finished().then_some((record.updated_at, *id))
        })
        .min();

    match oldest {
        Some((_, id)) => {
            games.remove(&id);
            tracing::info!(game_id = %id, "evicted finished game");
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draughts_core::Player;
    use draughts_core::{Coord, Piece};
    use draughts_engine::{Board, GameStatus, Rejection};

    fn request(from: (i32, i32), to: (i32, i32), player: Player) -> MoveRequest {
        MoveRequest {
            from_row: from.0,
            from_col: from.1,
            to_row: to.0,
            to_col: to.1,
            player,
        }
    }

    async fn started(store: &SessionStore) -> GameId {
        let created = store.create_game(Some("alice")).await.unwrap();
        store.join_game(created.id, Some("bob")).await.unwrap();
        created.id
    }

    #[tokio::test]
    async fn create_and_join() {
        let store = SessionStore::default();
        let created = store.create_game(Some("  alice ")).await.unwrap();
        assert_eq!(created.game.status(), GameStatus::Waiting);
        assert_eq!(created.game.player_name(Player::White), Some("alice"));

        let joined = store.join_game(created.id, Some("bob")).await.unwrap();
        assert_eq!(joined.game.status(), GameStatus::Playing);
        assert_eq!(joined.game.player_name(Player::Black), Some("bob"));
        assert!(joined.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn join_full_game() {
        let store = SessionStore::default();
        let id = started(&store).await;
        assert_eq!(
            store.join_game(id, Some("carol")).await,
            Err(SessionError::Game(GameError::SeatAlreadyFilled))
        );
    }

    #[tokio::test]
    async fn unknown_game() {
        let store = SessionStore::default();
        let id = Uuid::new_v4();
        assert_eq!(
            store.game_state(id).await.unwrap_err(),
            SessionError::GameNotFound(id)
        );
    }

    #[tokio::test]
    async fn move_updates_game_and_history() {
        let store = SessionStore::default();
        let id = started(&store).await;

        let response = store
            .submit_move(id, request((2, 2), (3, 3), Player::White))
            .await
            .unwrap();
        assert_eq!(response.move_result.next_turn, Some(Player::Black));
        assert_eq!(response.game.game.current_turn(), Player::Black);

        let state = store.game_state(id).await.unwrap();
        assert!(state.can_move);
        assert_eq!(state.moves.len(), 1);
        assert_eq!(state.moves[0].record.player, Player::White);
        assert_eq!(state.moves[0].game_id, id);
    }

    #[tokio::test]
    async fn illegal_move_is_reported() {
        let store = SessionStore::default();
        let id = started(&store).await;
        assert_eq!(
            store
                .submit_move(id, request((2, 2), (3, 2), Player::White))
                .await
                .unwrap_err(),
            SessionError::Game(GameError::IllegalMove(Rejection::NotDiagonal))
        );
        assert!(store.game_state(id).await.unwrap().moves.is_empty());
    }

    #[tokio::test]
    async fn move_before_join() {
        let store = SessionStore::default();
        let created = store.create_game(None).await.unwrap();
        assert_eq!(
            store
                .submit_move(created.id, request((2, 2), (3, 3), Player::White))
                .await
                .unwrap_err(),
            SessionError::Game(GameError::GameNotPlaying)
        );
    }

    #[tokio::test]
    async fn game_limit() {
        let store = SessionStore::new(SessionConfig {
            max_games: 1,
            ..SessionConfig::default()
        });
        store.create_game(None).await.unwrap();
        assert_eq!(
            store.create_game(None).await.unwrap_err(),
            SessionError::TooManyGames(1)
        );
    }

    /// Stores a game whose white man on (3,3) can take the last black man.
    async fn insert_one_capture_from_finish(store: &SessionStore) -> GameId {
        let at = |row, col| Coord::new(row, col).unwrap();
        let board = Board::with_pieces([
            (at(3, 3), Piece::man(Player::White)),
            (at(4, 4), Piece::man(Player::Black)),
        ])
        .unwrap();
        let now = Utc::now();
        let id = Uuid::new_v4();
        let record = GameRecord {
            id,
            game: Game::from_board(board, Player::White),
            created_at: now,
            updated_at: now,
            move_times: Vec::new(),
        };
        store
            .games
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(record)));
        id
    }

    #[tokio::test]
    async fn finished_game_frees_its_slot() {
        let store = SessionStore::new(SessionConfig {
            max_games: 1,
            ..SessionConfig::default()
        });
        let finished = insert_one_capture_from_finish(&store).await;
        let response = store
            .submit_move(finished, request((3, 3), (5, 5), Player::White))
            .await
            .unwrap();
        assert_eq!(response.move_result.winner, Some(Player::White));

        let created = store.create_game(None).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.game_state(finished).await.unwrap_err(),
            SessionError::GameNotFound(finished)
        );
        assert!(store.game_state(created.id).await.is_ok());
    }

    #[tokio::test]
    async fn active_games_keep_their_slots() {
        let store = SessionStore::new(SessionConfig {
            max_games: 1,
            ..SessionConfig::default()
        });
        let id = started(&store).await;
        store
            .submit_move(id, request((2, 2), (3, 3), Player::White))
            .await
            .unwrap();
        assert_eq!(
            store.create_game(None).await.unwrap_err(),
            SessionError::TooManyGames(1)
        );
    }

    #[tokio::test]
    async fn long_name_rejected() {
        let store = SessionStore::new(SessionConfig {
            max_player_name_len: 3,
            ..SessionConfig::default()
        });
        assert!(matches!(
            store.create_game(Some("alice")).await,
            Err(SessionError::InvalidPlayerName(_))
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn remove_game() {
        let store = SessionStore::default();
        let created = store.create_game(None).await.unwrap();
        assert_eq!(store.len().await, 1);
        store.remove_game(created.id).await.unwrap();
        assert_eq!(
            store.remove_game(created.id).await,
            Err(SessionError::GameNotFound(created.id))
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_moves_are_serialized() {
        let store = Arc::new(SessionStore::default());
        let id = started(&store).await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .submit_move(id, request((2, 2), (3, 3), Player::White))
                    .await
            }));
        }

        let mut accepted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(e) => assert_eq!(e, SessionError::Game(GameError::NotYourTurn)),
            }
        }
        assert_eq!(accepted, 1);

        let state = store.game_state(id).await.unwrap();
        assert_eq!(state.moves.len(), 1);
        assert_eq!(state.game.game.current_turn(), Player::Black);
    }
}
