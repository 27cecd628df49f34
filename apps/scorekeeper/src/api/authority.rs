//! Client-side boundary to the remote bowling service.

use async_trait::async_trait;

use crate::api::dto::HighscoreEntry;
use crate::domain::rolls::RollInput;
use crate::domain::state::{Game, GameId};
use crate::error::AppError;

/// Outcome of a frame submission as reported by the scoring service.
#[derive(Debug, Clone, PartialEq)]
pub struct RollResult {
    pub is_success: bool,
    pub error_message: Option<String>,
    /// Updated authoritative game state on success.
    pub state: Option<Game>,
}

/// Remote authority for game state and scoring.
///
/// The client never computes bonus-aware scores; it submits completed
/// frames and adopts whatever state the service returns. One request is
/// in flight at a time per game session.
#[async_trait]
pub trait GameAuthority: Send + Sync {
    async fn start_game(&self, name: &str) -> Result<Game, AppError>;

    async fn load_game(&self, game_id: GameId) -> Result<Game, AppError>;

    async fn submit_frame(&self, input: RollInput) -> Result<RollResult, AppError>;

    async fn list_highscores(&self) -> Result<Vec<HighscoreEntry>, AppError>;
}
