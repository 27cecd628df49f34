use crate::domain::rules::{
    pin_range, MAX_PINS, MAX_ROLLS_LAST_FRAME, MIN_PINS, ROLLS_PER_REGULAR_FRAME,
};
use crate::domain::state::{Game, GameId};
use crate::errors::domain::{DomainError, ValidationKind};

/// Wire-ready record for a completed frame (1..=3 rolls).
///
/// Absent rolls stay `None` so the scoring service can distinguish
/// "not thrown" from "zero pins"; they serialize as explicit nulls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollInput {
    pub game_id: GameId,
    pub roll1: u8,
    pub roll2: Option<u8>,
    pub roll3: Option<u8>,
}

/// Result of recording an accepted roll, describing what happens next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollOutcome {
    /// Frame still open; the current buffer is echoed for live display.
    FrameStillOpen(Vec<u8>),
    /// Frame closed and sum-valid; the buffer has been packaged for
    /// submission and cleared.
    FrameReadyToSubmit(RollInput),
}

/// Validate a single roll before acceptance.
///
/// Checks run in order: game existence, game completion, pin range. The
/// most specific, most actionable error wins regardless of which other
/// conditions also hold. No side effects; on success the active game is
/// handed back unchanged as the accepted signal.
pub fn validate_roll<'a>(game: Option<&'a Game>, pins: i32) -> Result<&'a Game, DomainError> {
    let Some(game) = game else {
        return Err(DomainError::validation(
            ValidationKind::NoActiveGame,
            "No active game. Please start a new game first.",
        ));
    };
    if game.is_game_over {
        return Err(DomainError::validation(
            ValidationKind::GameComplete,
            "Game is already complete.",
        ));
    }
    if !pin_range().contains(&pins) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPinCount,
            format!("Pins must be between {MIN_PINS} and {MAX_PINS}."),
        ));
    }
    Ok(game)
}

/// Validate the roll pair of a frame that might be complete.
///
/// Applies only to regular frames with exactly two recorded rolls where
/// the first was not a strike: each roll was in range on its own, but the
/// pair may still be illegal (e.g. 6 then 7). Runs after the second roll
/// is known so the message can report both values and their sum.
///
/// The last frame has no sum check; bonus combinations are the scoring
/// service's concern.
pub fn validate_frame(is_last_frame: bool, rolls: &[u8]) -> Result<(), DomainError> {
    let roll1 = rolls.first().copied().unwrap_or(0);
    let roll2 = rolls.get(1).copied().unwrap_or(0);

    // A strike frame never reaches two rolls, so the roll1 guard is
    // unobservable here.
    if !is_last_frame && roll1 != MAX_PINS && rolls.len() == ROLLS_PER_REGULAR_FRAME {
        let sum = u16::from(roll1) + u16::from(roll2);
        if sum > u16::from(MAX_PINS) {
            return Err(DomainError::validation(
                ValidationKind::InvalidFrameSum,
                format!("Invalid frame: {roll1} + {roll2} = {sum} > {MAX_PINS}"),
            ));
        }
    }
    Ok(())
}

/// Decide whether enough rolls have been collected to close the frame.
///
/// Regular frames close on a strike or after two rolls. The last frame
/// never closes under two rolls; a strike or spare in the first two
/// rolls earns a mandatory third, otherwise two rolls close it.
pub fn is_frame_complete(is_last_frame: bool, rolls: &[u8]) -> bool {
    if rolls.is_empty() {
        return false;
    }
    let is_strike = rolls[0] == MAX_PINS;

    if !is_last_frame {
        return is_strike || rolls.len() >= ROLLS_PER_REGULAR_FRAME;
    }
    if rolls.len() < ROLLS_PER_REGULAR_FRAME {
        return false;
    }
    let is_spare = rolls[0] + rolls[1] == MAX_PINS;

    if is_strike || is_spare {
        rolls.len() >= MAX_ROLLS_LAST_FRAME
    } else {
        rolls.len() >= ROLLS_PER_REGULAR_FRAME
    }
}

/// Package a complete, sum-valid buffer for submission.
pub fn build_roll_input(game_id: GameId, rolls: &[u8]) -> RollInput {
    RollInput {
        game_id,
        roll1: rolls.first().copied().unwrap_or(0),
        roll2: rolls.get(1).copied(),
        roll3: rolls.get(2).copied(),
    }
}
