use crate::domain::rules::{is_last_frame, LAST_FRAME_INDEX, MAX_PINS, MAX_ROLLS_LAST_FRAME};

pub type GameId = i64;

/// Which of a frame's up-to-three roll slots is being addressed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum RollSlot {
    First,
    Second,
    Third,
}

/// One of the ten frames of a game, as returned by the scoring service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub id: i64,
    pub game_id: GameId,
    /// 0-based position, 0..=9; only index 9 is the last frame.
    pub frame_index: u8,
    pub roll1: Option<u8>,
    pub roll2: Option<u8>,
    /// Only meaningful on the last frame.
    pub roll3: Option<u8>,
    /// Authoritative per-frame score from the scoring service.
    /// Never computed locally from raw rolls.
    pub score: i32,
    pub is_strike: bool,
    pub is_spare: bool,
}

impl Frame {
    pub fn roll(&self, slot: RollSlot) -> Option<u8> {
        match slot {
            RollSlot::First => self.roll1,
            RollSlot::Second => self.roll2,
            RollSlot::Third => self.roll3,
        }
    }

    pub fn is_last(&self) -> bool {
        self.frame_index == LAST_FRAME_INDEX
    }

    /// Transient frame synthesized from the in-progress buffer, so the
    /// scoreboard shows correct glyphs roll-by-roll before the frame
    /// closes. Score is never derived locally.
    pub fn live(frame_index: u8, rolls: &[u8]) -> Self {
        let roll1 = rolls.first().copied();
        let roll2 = rolls.get(1).copied();
        let is_strike = roll1 == Some(MAX_PINS);
        let is_spare =
            !is_strike && roll1.unwrap_or(0) + roll2.unwrap_or(0) == MAX_PINS;
        Self {
            id: -1,
            game_id: -1,
            frame_index,
            roll1,
            roll2,
            roll3: rolls.get(2).copied(),
            score: 0,
            is_strike,
            is_spare,
        }
    }
}

/// In-progress rolls for the frame not yet closed (0..=3 entries).
///
/// Created empty when a game starts or a frame closes; appended to by
/// each accepted roll; cleared on closure or frame-sum rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollBuffer {
    rolls: Vec<u8>,
}

impl RollBuffer {
    pub fn new() -> Self {
        Self {
            rolls: Vec::with_capacity(MAX_ROLLS_LAST_FRAME),
        }
    }

    pub fn push(&mut self, pins: u8) {
        self.rolls.push(pins);
    }

    pub fn clear(&mut self) {
        self.rolls.clear();
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }
}

/// Authoritative game state owned by the scoring service.
///
/// The client reads it for validity checks and the last-frame predicate;
/// it is replaced wholesale (after reconciliation) on each successful
/// frame submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    /// Closed frames in order (length 0..=10).
    pub frames: Vec<Frame>,
    /// 1-based frame number the player is currently on.
    pub current_frame_number: u8,
    pub is_game_over: bool,
}

impl Game {
    /// True when nine frames are closed and the tenth is in progress.
    pub fn in_last_frame(&self) -> bool {
        is_last_frame(self.frames.len())
    }
}
