//! Highscore listing via the remote service.

use std::sync::Arc;

use tracing::warn;

use crate::api::authority::GameAuthority;
use crate::api::dto::HighscoreEntry;

/// Cached highscore list with last-error surfacing.
///
/// A failed refresh empties the list and keeps a ready-to-render message;
/// it never tears down the session.
pub struct HighscoreService {
    authority: Arc<dyn GameAuthority>,
    scores: Vec<HighscoreEntry>,
    last_error: Option<String>,
}

impl HighscoreService {
    pub fn new(authority: Arc<dyn GameAuthority>) -> Self {
        Self {
            authority,
            scores: Vec::new(),
            last_error: None,
        }
    }

    /// Refresh the cached list from the service.
    pub async fn load(&mut self) -> &[HighscoreEntry] {
        self.last_error = None;
        match self.authority.list_highscores().await {
            Ok(scores) => {
                self.scores = scores;
            }
            Err(err) => {
                warn!(error = %err, "Failed to load highscores");
                self.scores = Vec::new();
                self.last_error = Some("Failed to load highscores".to_string());
            }
        }
        &self.scores
    }

    pub fn scores(&self) -> &[HighscoreEntry] {
        &self.scores
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
