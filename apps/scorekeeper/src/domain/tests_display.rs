use crate::domain::display::{frame_views, roll_glyph};
use crate::domain::state::{Frame, RollBuffer, RollSlot};

fn regular_frame(frame_index: u8, roll1: Option<u8>, roll2: Option<u8>) -> Frame {
    let is_strike = roll1 == Some(10);
    let is_spare = !is_strike && roll1.unwrap_or(0) + roll2.unwrap_or(0) == 10;
    Frame {
        id: 1,
        game_id: 1,
        frame_index,
        roll1,
        roll2,
        roll3: None,
        score: 0,
        is_strike,
        is_spare,
    }
}

fn last_frame(roll1: Option<u8>, roll2: Option<u8>, roll3: Option<u8>) -> Frame {
    let mut frame = regular_frame(9, roll1, roll2);
    frame.roll3 = roll3;
    frame
}

#[test]
fn absent_roll_renders_blank() {
    let frame = regular_frame(0, None, None);
    assert_eq!(roll_glyph(&frame, RollSlot::First), "");
    assert_eq!(roll_glyph(&frame, RollSlot::Second), "");
    assert_eq!(roll_glyph(&frame, RollSlot::Third), "");
}

#[test]
fn strike_renders_x_in_first_slot() {
    let frame = regular_frame(3, Some(10), None);
    assert_eq!(roll_glyph(&frame, RollSlot::First), "X");
}

#[test]
fn spare_renders_slash_in_second_slot() {
    let frame = regular_frame(2, Some(7), Some(3));
    assert!(frame.is_spare);
    assert_eq!(roll_glyph(&frame, RollSlot::First), "7");
    assert_eq!(roll_glyph(&frame, RollSlot::Second), "/");
}

#[test]
fn open_frame_renders_digits() {
    let frame = regular_frame(0, Some(4), Some(5));
    assert_eq!(roll_glyph(&frame, RollSlot::First), "4");
    assert_eq!(roll_glyph(&frame, RollSlot::Second), "5");
}

#[test]
fn zero_pins_renders_zero_not_blank() {
    let frame = regular_frame(0, Some(0), Some(0));
    assert_eq!(roll_glyph(&frame, RollSlot::First), "0");
    assert_eq!(roll_glyph(&frame, RollSlot::Second), "0");
}

#[test]
fn tenth_frame_strikes_render_x_in_all_slots() {
    let frame = last_frame(Some(10), Some(10), Some(10));
    assert_eq!(roll_glyph(&frame, RollSlot::First), "X");
    assert_eq!(roll_glyph(&frame, RollSlot::Second), "X");
    assert_eq!(roll_glyph(&frame, RollSlot::Third), "X");
}

#[test]
fn tenth_frame_bonus_strike_after_spare_renders_x() {
    let frame = last_frame(Some(5), Some(5), Some(10));
    assert!(frame.is_spare);
    assert_eq!(roll_glyph(&frame, RollSlot::Second), "/");
    assert_eq!(roll_glyph(&frame, RollSlot::Third), "X");
}

#[test]
fn tenth_frame_bonus_spare_after_strike_renders_slash() {
    // X, 7, 3: the bonus pair 7+3 forms a spare on slot 3
    let frame = last_frame(Some(10), Some(7), Some(3));
    assert!(!frame.is_spare);
    assert_eq!(roll_glyph(&frame, RollSlot::First), "X");
    assert_eq!(roll_glyph(&frame, RollSlot::Second), "7");
    assert_eq!(roll_glyph(&frame, RollSlot::Third), "/");
}

#[test]
fn tenth_frame_third_roll_after_spare_renders_digit() {
    // 7, 3 (spare), 7: slot 3 must NOT render "/" even though 3+7=10
    let frame = last_frame(Some(7), Some(3), Some(7));
    assert!(frame.is_spare);
    assert_eq!(roll_glyph(&frame, RollSlot::Second), "/");
    assert_eq!(roll_glyph(&frame, RollSlot::Third), "7");
}

#[test]
fn live_frame_formats_like_authoritative() {
    let live = Frame::live(4, &[10]);
    assert_eq!(roll_glyph(&live, RollSlot::First), "X");

    let live = Frame::live(4, &[7, 3]);
    assert_eq!(roll_glyph(&live, RollSlot::Second), "/");

    let live = Frame::live(9, &[10, 10]);
    assert_eq!(roll_glyph(&live, RollSlot::Second), "X");
}

#[test]
fn formatting_is_idempotent() {
    let frame = last_frame(Some(10), Some(7), Some(3));
    for slot in [RollSlot::First, RollSlot::Second, RollSlot::Third] {
        assert_eq!(roll_glyph(&frame, slot), roll_glyph(&frame, slot));
    }
}

#[test]
fn frame_views_blend_closed_live_and_unreached() {
    let mut first = regular_frame(0, Some(7), Some(3));
    first.score = 14;
    let closed = vec![first];
    let mut live = RollBuffer::new();
    live.push(4);

    let views = frame_views(&closed, &live);
    assert_eq!(views.len(), 10);

    assert_eq!(views[0].roll2, "/");
    assert_eq!(views[0].score, Some(14));

    // Live frame shows rolls but no score yet
    assert_eq!(views[1].roll1, "4");
    assert_eq!(views[1].score, None);

    // Untouched frames are blank
    assert_eq!(views[2].roll1, "");
    assert_eq!(views[2].score, None);

    assert!(views[9].is_tenth);
    assert!(!views[0].is_tenth);
}

#[test]
fn frame_views_accumulate_running_totals() {
    let mut frames = Vec::new();
    for (idx, score) in [(0u8, 10), (1u8, 9), (2u8, 10)] {
        let mut frame = regular_frame(idx, Some(4), Some(5));
        frame.score = score;
        frames.push(frame);
    }

    let views = frame_views(&frames, &RollBuffer::new());
    assert_eq!(views[0].score, Some(10));
    assert_eq!(views[1].score, Some(19));
    assert_eq!(views[2].score, Some(29));
    assert_eq!(views[3].score, None);
}
