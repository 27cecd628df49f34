//! Game session orchestration: roll intake, frame submission, and
//! reconciliation of the authoritative state.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::authority::GameAuthority;
use crate::domain::display::{frame_views, FrameView};
use crate::domain::reconcile::reconcile_frames;
use crate::domain::rolls::{
    build_roll_input, is_frame_complete, validate_frame, validate_roll, RollInput, RollOutcome,
};
use crate::domain::scoring;
use crate::domain::state::{Game, GameId, RollBuffer};
use crate::error::AppError;
use crate::errors::domain::DomainError;

/// What a fully orchestrated roll did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollProgress {
    /// The frame is still open; keep rolling.
    FrameOpen,
    /// The frame closed, was submitted, and authoritative state was adopted.
    FrameScored,
}

/// One scorekeeping session for one game.
///
/// Owns the two pieces of client state - the last authoritative game and
/// the in-progress roll buffer - which are always disjoint and together
/// describe the whole game. Single-writer, single-reader: one roll at a
/// time, one request in flight at a time.
pub struct GameSession {
    authority: Arc<dyn GameAuthority>,
    game: Option<Game>,
    rolls: RollBuffer,
}

impl GameSession {
    pub fn new(authority: Arc<dyn GameAuthority>) -> Self {
        Self {
            authority,
            game: None,
            rolls: RollBuffer::new(),
        }
    }

    pub fn current_game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn player_name(&self) -> &str {
        self.game.as_ref().map(|g| g.name.as_str()).unwrap_or("")
    }

    pub fn current_frame_rolls(&self) -> &[u8] {
        self.rolls.rolls()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.as_ref().is_some_and(|g| g.is_game_over)
    }

    /// Ten-entry scoreboard blending closed frames and the live buffer.
    pub fn scoreboard(&self) -> Vec<FrameView> {
        let frames = self.game.as_ref().map(|g| g.frames.as_slice()).unwrap_or(&[]);
        frame_views(frames, &self.rolls)
    }

    /// Total over all closed frames; the in-progress frame contributes
    /// nothing until it closes.
    pub fn total_score(&self) -> i32 {
        self.game
            .as_ref()
            .map(|g| scoring::total_score(&g.frames))
            .unwrap_or(0)
    }

    /// Cumulative score through the frame at `frame_index` (0-based).
    pub fn cumulative_score_through(&self, frame_index: u8) -> i32 {
        self.game
            .as_ref()
            .map(|g| scoring::cumulative_score_through(&g.frames, frame_index))
            .unwrap_or(0)
    }

    /// Start a new game for the named player and reset local state.
    pub async fn start_game(&mut self, name: &str) -> Result<&Game, AppError> {
        info!(name, "Starting new game");
        let game = self.authority.start_game(name).await.map_err(|err| {
            warn!(error = %err, "Failed to start game");
            err
        })?;
        self.rolls.clear();
        Ok(self.game.insert(game))
    }

    /// Resume a persisted game and reset the roll buffer.
    ///
    /// A game with an in-progress buffer always resumes into that exact
    /// buffer on the client that holds it; loading from the service starts
    /// from the last closed frame.
    pub async fn load_game(&mut self, game_id: GameId) -> Result<&Game, AppError> {
        info!(game_id, "Loading game");
        let game = self.authority.load_game(game_id).await.map_err(|err| {
            warn!(error = %err, "Failed to load game");
            err
        })?;
        self.rolls.clear();
        Ok(self.game.insert(game))
    }

    /// Validate and record a single roll for the frame in progress.
    ///
    /// Pure with respect to the network: either the frame stays open, or
    /// the buffer is packaged into a `RollInput` and cleared in
    /// expectation of submission (optimistic clear). A frame-sum
    /// rejection clears the whole buffer - the frame cannot be partially
    /// salvaged.
    pub fn record_roll(&mut self, pins: i32) -> Result<RollOutcome, DomainError> {
        let game = validate_roll(self.game.as_ref(), pins)?;
        let is_last = game.in_last_frame();
        let game_id = game.id;

        self.rolls.push(pins as u8);
        debug!(pins, rolls = self.rolls.len(), "Recorded roll");

        if !is_frame_complete(is_last, self.rolls.rolls()) {
            return Ok(RollOutcome::FrameStillOpen(self.rolls.rolls().to_vec()));
        }

        if let Err(err) = validate_frame(is_last, self.rolls.rolls()) {
            self.rolls.clear();
            return Err(err);
        }

        let input = build_roll_input(game_id, self.rolls.rolls());
        self.rolls.clear();
        Ok(RollOutcome::FrameReadyToSubmit(input))
    }

    /// Submit a completed frame and adopt the authoritative state.
    ///
    /// The roll buffer was already cleared when the frame closed; on any
    /// failure it stays cleared and the player re-enters the frame. The
    /// service outcome is unknown on transport failure, so local progress
    /// is conservatively discarded rather than retried.
    pub async fn submit_frame(&mut self, input: RollInput) -> Result<&Game, AppError> {
        debug!(game_id = input.game_id, "Submitting frame");
        let result = match self.authority.submit_frame(input).await {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "Frame submission failed");
                return Err(AppError::submission(err.detail().to_string()));
            }
        };

        if !result.is_success {
            let message = result
                .error_message
                .unwrap_or_else(|| "Failed to add throw. Please try again.".to_string());
            warn!(message = %message, "Scoring service rejected frame");
            return Err(AppError::submission(message));
        }

        let Some(state) = result.state else {
            return Err(AppError::bad_response(
                "Bowling service accepted the frame but returned no state.",
            ));
        };
        Ok(self.adopt(state))
    }

    /// Record a roll and, when it closes the frame, submit it.
    pub async fn roll(&mut self, pins: i32) -> Result<RollProgress, AppError> {
        match self.record_roll(pins)? {
            RollOutcome::FrameStillOpen(_) => Ok(RollProgress::FrameOpen),
            RollOutcome::FrameReadyToSubmit(input) => {
                self.submit_frame(input).await?;
                Ok(RollProgress::FrameScored)
            }
        }
    }

    /// Replace local state with the incoming game, keeping local frame
    /// instances whose fields are unchanged.
    fn adopt(&mut self, mut incoming: Game) -> &Game {
        if let Some(local) = self.game.as_ref() {
            incoming.frames = reconcile_frames(&local.frames, incoming.frames);
        }
        info!(
            game_id = incoming.id,
            frames = incoming.frames.len(),
            game_over = incoming.is_game_over,
            "Adopted authoritative game state"
        );
        self.game.insert(incoming)
    }
}
