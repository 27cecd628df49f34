/// Property-based tests for roll validation and frame completion
use proptest::prelude::*;

use crate::domain::display::roll_glyph;
use crate::domain::rolls::{is_frame_complete, validate_frame, validate_roll};
use crate::domain::scoring::{running_totals, total_score};
use crate::domain::state::{Frame, Game, RollSlot};
use crate::errors::domain::{DomainError, ValidationKind};

fn active_game() -> Game {
    Game {
        id: 1,
        name: "prop".to_string(),
        frames: Vec::new(),
        current_frame_number: 1,
        is_game_over: false,
    }
}

proptest! {
    /// Property: every in-range pin count is accepted for an active game.
    #[test]
    fn prop_in_range_pins_accepted(pins in 0i32..=10) {
        let game = active_game();
        prop_assert!(validate_roll(Some(&game), pins).is_ok());
    }

    /// Property: every out-of-range pin count is rejected as InvalidPinCount.
    #[test]
    fn prop_out_of_range_pins_rejected(pins in prop_oneof![-1000i32..0, 11i32..1000]) {
        let game = active_game();
        let err = validate_roll(Some(&game), pins).unwrap_err();
        prop_assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::InvalidPinCount, _)
        ));
    }

    /// Property: a regular-frame pair is rejected exactly when it sums past 10.
    #[test]
    fn prop_frame_sum_rejection(roll1 in 0u8..10, roll2 in 0u8..=10) {
        let result = validate_frame(false, &[roll1, roll2]);
        if roll1 + roll2 > 10 {
            let err = result.unwrap_err();
            prop_assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::InvalidFrameSum, _)
            ));
        } else {
            prop_assert!(result.is_ok());
        }
    }

    /// Property: the last frame never rejects a sum.
    #[test]
    fn prop_last_frame_has_no_sum_check(
        roll1 in 0u8..=10,
        roll2 in 0u8..=10,
        roll3 in proptest::option::of(0u8..=10),
    ) {
        let mut rolls = vec![roll1, roll2];
        if let Some(r3) = roll3 {
            rolls.push(r3);
        }
        prop_assert!(validate_frame(true, &rolls).is_ok());
    }

    /// Property: completion is monotone - once a prefix of the buffer is
    /// complete, every longer buffer is complete too.
    #[test]
    fn prop_completion_monotone(
        is_last in any::<bool>(),
        rolls in proptest::collection::vec(0u8..=10, 0..=3),
    ) {
        let mut was_complete = false;
        for len in 0..=rolls.len() {
            let complete = is_frame_complete(is_last, &rolls[..len]);
            if was_complete {
                prop_assert!(complete);
            }
            was_complete = complete;
        }
    }

    /// Property: glyph formatting is a pure function of frame + slot.
    #[test]
    fn prop_glyph_formatting_pure(
        frame_index in 0u8..=9,
        rolls in proptest::collection::vec(0u8..=10, 0..=3),
    ) {
        let frame = Frame::live(frame_index, &rolls);
        for slot in [RollSlot::First, RollSlot::Second, RollSlot::Third] {
            prop_assert_eq!(roll_glyph(&frame, slot), roll_glyph(&frame, slot));
        }
    }

    /// Property: running totals are nondecreasing for non-negative frame
    /// scores, and the last one equals the summed total.
    #[test]
    fn prop_running_totals_monotone(scores in proptest::collection::vec(0i32..=30, 1..=10)) {
        let frames: Vec<Frame> = scores
            .iter()
            .enumerate()
            .map(|(idx, &score)| {
                let mut frame = Frame::live(idx as u8, &[1, 2]);
                frame.score = score;
                frame
            })
            .collect();

        let totals = running_totals(&frames);
        for pair in totals.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        prop_assert_eq!(*totals.last().unwrap(), total_score(&frames));
    }
}
