//! Reconcile the authoritative frame list against locally held frames.

use crate::domain::state::Frame;

/// Merge keyed by frame index: frames whose roll and score fields are
/// unchanged keep the local instance (rendering stability), changed or
/// new frames are taken from the incoming authoritative list.
pub fn reconcile_frames(local: &[Frame], incoming: Vec<Frame>) -> Vec<Frame> {
    incoming
        .into_iter()
        .map(|inc| {
            match local.iter().find(|l| l.frame_index == inc.frame_index) {
                Some(l) if rolls_and_score_match(l, &inc) => l.clone(),
                _ => inc,
            }
        })
        .collect()
}

fn rolls_and_score_match(a: &Frame, b: &Frame) -> bool {
    a.roll1 == b.roll1 && a.roll2 == b.roll2 && a.roll3 == b.roll3 && a.score == b.score
}
