//! Per-roll glyph formatting and the scoreboard view model.

use crate::domain::rules::{LAST_FRAME_INDEX, MAX_FRAMES, MAX_PINS};
use crate::domain::state::{Frame, RollBuffer, RollSlot};

pub const STRIKE_GLYPH: &str = "X";
pub const SPARE_GLYPH: &str = "/";

/// Canonical textual glyph for one roll slot of a frame.
///
/// Pure function of frame + slot; operates identically on authoritative
/// frames and live frames synthesized from the in-progress buffer.
pub fn roll_glyph(frame: &Frame, slot: RollSlot) -> String {
    let Some(val) = frame.roll(slot) else {
        return String::new();
    };

    if frame.is_strike && slot == RollSlot::First {
        return STRIKE_GLYPH.to_string();
    }

    if frame.is_last() {
        // Tenth-frame strikes can legally occur in any of the three slots.
        if val == MAX_PINS && (slot == RollSlot::Second || slot == RollSlot::Third) {
            return STRIKE_GLYPH.to_string();
        }
        if slot == RollSlot::Second {
            let prev = frame.roll1.unwrap_or(0);
            if prev != MAX_PINS && prev + val == MAX_PINS {
                return SPARE_GLYPH.to_string();
            }
        }
        // Bonus-roll spare (e.g. X, 7, 3) - skipped when the frame is
        // already a spare from rolls 1-2 (7, 3, 7 must show the digit).
        if slot == RollSlot::Third && !frame.is_spare {
            let prev = frame.roll2.unwrap_or(0);
            if prev != MAX_PINS && prev + val == MAX_PINS {
                return SPARE_GLYPH.to_string();
            }
        }
    } else if slot == RollSlot::Second && !frame.is_strike {
        let prev = frame.roll1.unwrap_or(0);
        if prev + val == MAX_PINS {
            return SPARE_GLYPH.to_string();
        }
    }

    val.to_string()
}

/// One scoreboard cell: formatted roll slots plus the running total once
/// the frame is closed and scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    /// 1-based frame number.
    pub frame_number: u8,
    pub roll1: String,
    pub roll2: String,
    pub roll3: String,
    /// Running total through this frame; `None` while the frame is open.
    pub score: Option<i32>,
    pub is_tenth: bool,
}

/// Build the ten-entry scoreboard: closed frames render with running
/// totals, the frame in progress renders live from the buffer, frames not
/// yet reached render blank.
pub fn frame_views(frames: &[Frame], live: &RollBuffer) -> Vec<FrameView> {
    let mut cumulative = 0;

    (0..MAX_FRAMES)
        .map(|idx| {
            let closed = frames.get(idx);
            let live_frame = (idx == frames.len() && !live.is_empty())
                .then(|| Frame::live(idx as u8, live.rolls()));
            let frame = closed.or(live_frame.as_ref());
            let score = closed.map(|f| {
                cumulative += f.score;
                cumulative
            });

            FrameView {
                frame_number: idx as u8 + 1,
                roll1: frame
                    .map(|f| roll_glyph(f, RollSlot::First))
                    .unwrap_or_default(),
                roll2: frame
                    .map(|f| roll_glyph(f, RollSlot::Second))
                    .unwrap_or_default(),
                roll3: frame
                    .map(|f| roll_glyph(f, RollSlot::Third))
                    .unwrap_or_default(),
                score,
                is_tenth: idx == usize::from(LAST_FRAME_INDEX),
            }
        })
        .collect()
}
