use crate::domain::scoring::{cumulative_score_through, running_totals, total_score};
use crate::domain::state::Frame;

fn scored_frames(scores: &[i32]) -> Vec<Frame> {
    scores
        .iter()
        .enumerate()
        .map(|(idx, &score)| Frame {
            id: idx as i64,
            game_id: 1,
            frame_index: idx as u8,
            roll1: Some(4),
            roll2: Some(4),
            roll3: None,
            score,
            is_strike: false,
            is_spare: false,
        })
        .collect()
}

#[test]
fn running_totals_prefix_sum_in_frame_order() {
    let frames = scored_frames(&[10, 9, 10]);
    assert_eq!(running_totals(&frames), vec![10, 19, 29]);
}

#[test]
fn running_totals_empty_game() {
    assert_eq!(running_totals(&[]), Vec::<i32>::new());
}

#[test]
fn total_equals_last_running_total() {
    let frames = scored_frames(&[10, 9, 10, 30, 7]);
    let totals = running_totals(&frames);
    assert_eq!(total_score(&frames), *totals.last().unwrap());
}

#[test]
fn cumulative_through_frame_index() {
    let frames = scored_frames(&[10, 9, 10]);
    assert_eq!(cumulative_score_through(&frames, 0), 10);
    assert_eq!(cumulative_score_through(&frames, 1), 19);
    assert_eq!(cumulative_score_through(&frames, 2), 29);
    // Indexes past the closed frames see the full total
    assert_eq!(cumulative_score_through(&frames, 9), 29);
}
