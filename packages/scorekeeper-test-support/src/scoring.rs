//! Reference bonus-aware ten-pin scoring.
//!
//! The scorekeeper client never computes bonus scores itself; tests need
//! something that does, so the mock authority leans on this module. It
//! operates on raw roll sequences only and has no dependency on the
//! client crate.

/// Per-frame scores for a (possibly partial) game, bonus look-ahead
/// included. `frames` holds the raw rolls of each closed frame in order;
/// strike and spare bonuses draw on whatever later rolls exist so far.
pub fn frame_scores(frames: &[Vec<u8>]) -> Vec<i32> {
    let flat: Vec<u8> = frames.iter().flatten().copied().collect();

    let mut start = 0;
    frames
        .iter()
        .enumerate()
        .map(|(frame_index, rolls)| {
            let score = score_frame(frame_index, rolls, &flat, start);
            start += rolls.len();
            score
        })
        .collect()
}

/// Total score of a (possibly partial) game.
pub fn total(frames: &[Vec<u8>]) -> i32 {
    frame_scores(frames).iter().sum()
}

fn score_frame(frame_index: usize, rolls: &[u8], flat: &[u8], start: usize) -> i32 {
    let base: i32 = rolls.iter().copied().map(i32::from).sum();
    // The tenth frame scores exactly its own pins; its extra rolls are
    // the bonus balls of earlier frames, not of itself.
    if frame_index == 9 {
        return base;
    }

    let is_strike = rolls.first().copied() == Some(10);
    let is_spare = !is_strike && base == 10;
    let bonus_rolls = if is_strike {
        2
    } else if is_spare {
        1
    } else {
        0
    };

    let next = start + rolls.len();
    let bonus: i32 = flat[next..]
        .iter()
        .take(bonus_rolls)
        .copied()
        .map(i32::from)
        .sum();
    base + bonus
}
