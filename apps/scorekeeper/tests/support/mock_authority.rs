//! In-memory stand-in for the remote bowling service.
//!
//! Scoring uses the reference bonus-aware scorer from the test-support
//! package, so integration tests see realistic authoritative state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use time::macros::datetime;

use scorekeeper::api::{GameAuthority, HighscoreEntry, RollResult};
use scorekeeper::domain::{Frame, Game, GameId, RollInput};
use scorekeeper::error::AppError;
use scorekeeper::errors::ErrorCode;
use scorekeeper_test_support::scoring::frame_scores;

pub struct MockAuthority {
    state: Mutex<MockState>,
    fail_next_submission: AtomicBool,
}

struct MockState {
    next_game_id: i64,
    game: Option<StoredGame>,
}

struct StoredGame {
    id: GameId,
    name: String,
    /// Raw rolls of each closed frame, in order.
    frames: Vec<Vec<u8>>,
}

impl MockAuthority {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                next_game_id: 1,
                game: None,
            }),
            fail_next_submission: AtomicBool::new(false),
        }
    }

    /// Make the next submit_frame call fail like a transport outage.
    pub fn fail_next_submission(&self) {
        self.fail_next_submission.store(true, Ordering::SeqCst);
    }

    fn snapshot(stored: &StoredGame) -> Game {
        let scores = frame_scores(&stored.frames);
        let frames: Vec<Frame> = stored
            .frames
            .iter()
            .zip(scores)
            .enumerate()
            .map(|(idx, (rolls, score))| {
                let roll1 = rolls.first().copied();
                let roll2 = rolls.get(1).copied();
                let is_strike = roll1 == Some(10);
                let is_spare = !is_strike && roll1.unwrap_or(0) + roll2.unwrap_or(0) == 10;
                Frame {
                    id: idx as i64 + 1,
                    game_id: stored.id,
                    frame_index: idx as u8,
                    roll1,
                    roll2,
                    roll3: rolls.get(2).copied(),
                    score,
                    is_strike,
                    is_spare,
                }
            })
            .collect();

        let is_game_over = frames.len() == 10;
        Game {
            id: stored.id,
            name: stored.name.clone(),
            current_frame_number: (frames.len() as u8 + 1).min(10),
            frames,
            is_game_over,
        }
    }
}

impl Default for MockAuthority {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameAuthority for MockAuthority {
    async fn start_game(&self, name: &str) -> Result<Game, AppError> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_game_id;
        state.next_game_id += 1;
        let stored = StoredGame {
            id,
            name: name.to_string(),
            frames: Vec::new(),
        };
        let game = Self::snapshot(&stored);
        state.game = Some(stored);
        Ok(game)
    }

    async fn load_game(&self, game_id: GameId) -> Result<Game, AppError> {
        let state = self.state.lock().unwrap();
        match state.game.as_ref().filter(|g| g.id == game_id) {
            Some(stored) => Ok(Self::snapshot(stored)),
            None => Err(AppError::NotFound {
                code: ErrorCode::GameNotFound,
                detail: "Game not found.".to_string(),
            }),
        }
    }

    async fn submit_frame(&self, input: RollInput) -> Result<RollResult, AppError> {
        if self.fail_next_submission.swap(false, Ordering::SeqCst) {
            return Err(AppError::ServiceUnavailable {
                detail: "Failed to communicate with bowling service.".to_string(),
            });
        }

        let mut state = self.state.lock().unwrap();
        let Some(stored) = state.game.as_mut().filter(|g| g.id == input.game_id) else {
            return Ok(RollResult {
                is_success: false,
                error_message: Some("Unknown game.".to_string()),
                state: None,
            });
        };

        let mut rolls = vec![input.roll1];
        rolls.extend(input.roll2);
        rolls.extend(input.roll3);
        stored.frames.push(rolls);

        let game = Self::snapshot(stored);
        Ok(RollResult {
            is_success: true,
            error_message: None,
            state: Some(game),
        })
    }

    async fn list_highscores(&self) -> Result<Vec<HighscoreEntry>, AppError> {
        Ok(vec![
            HighscoreEntry {
                name: "Amalie".to_string(),
                score: 280,
                date_achieved: datetime!(2025-11-02 18:30 UTC),
            },
            HighscoreEntry {
                name: "Jonas".to_string(),
                score: 255,
                date_achieved: datetime!(2025-12-14 20:05 UTC),
            },
        ])
    }
}

/// Authority whose every call fails; exercises error surfacing.
pub struct DownAuthority;

#[async_trait]
impl GameAuthority for DownAuthority {
    async fn start_game(&self, _name: &str) -> Result<Game, AppError> {
        Err(down())
    }

    async fn load_game(&self, _game_id: GameId) -> Result<Game, AppError> {
        Err(down())
    }

    async fn submit_frame(&self, _input: RollInput) -> Result<RollResult, AppError> {
        Err(down())
    }

    async fn list_highscores(&self) -> Result<Vec<HighscoreEntry>, AppError> {
        Err(down())
    }
}

fn down() -> AppError {
    AppError::ServiceUnavailable {
        detail: "Failed to communicate with bowling service.".to_string(),
    }
}
