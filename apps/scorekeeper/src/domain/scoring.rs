use crate::domain::state::Frame;

/// Running total through each closed frame, in frame order.
///
/// A pure, order-dependent fold over the authoritative per-frame scores;
/// bonus logic is never recomputed locally. The in-progress buffer
/// contributes nothing until its frame closes.
pub fn running_totals(frames: &[Frame]) -> Vec<i32> {
    let mut cumulative = 0;
    frames
        .iter()
        .map(|f| {
            cumulative += f.score;
            cumulative
        })
        .collect()
}

/// Cumulative score through the frame at `frame_index`.
pub fn cumulative_score_through(frames: &[Frame], frame_index: u8) -> i32 {
    frames
        .iter()
        .filter(|f| f.frame_index <= frame_index)
        .map(|f| f.score)
        .sum()
}

/// Sum of all closed frames' scores; equals the last running total.
pub fn total_score(frames: &[Frame]) -> i32 {
    frames.iter().map(|f| f.score).sum()
}
