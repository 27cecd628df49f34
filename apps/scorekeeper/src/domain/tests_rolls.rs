use crate::domain::rolls::{
    build_roll_input, is_frame_complete, validate_frame, validate_roll,
};
use crate::domain::state::Game;
use crate::errors::domain::{DomainError, ValidationKind};

fn active_game() -> Game {
    Game {
        id: 1,
        name: "Testplayer".to_string(),
        frames: Vec::new(),
        current_frame_number: 1,
        is_game_over: false,
    }
}

#[test]
fn validate_roll_accepts_legal_pins() {
    let game = active_game();
    for pins in 0..=10 {
        assert!(validate_roll(Some(&game), pins).is_ok());
    }
}

#[test]
fn validate_roll_rejects_without_game() {
    assert_eq!(
        validate_roll(None, 5).unwrap_err(),
        DomainError::validation(
            ValidationKind::NoActiveGame,
            "No active game. Please start a new game first."
        )
    );
}

#[test]
fn validate_roll_rejects_completed_game() {
    let mut game = active_game();
    game.is_game_over = true;
    assert_eq!(
        validate_roll(Some(&game), 5).unwrap_err(),
        DomainError::validation(ValidationKind::GameComplete, "Game is already complete.")
    );
}

#[test]
fn validate_roll_rejects_out_of_range_pins() {
    let game = active_game();
    for pins in [-1, -42, 11, 100] {
        assert_eq!(
            validate_roll(Some(&game), pins).unwrap_err(),
            DomainError::validation(
                ValidationKind::InvalidPinCount,
                "Pins must be between 0 and 10."
            )
        );
    }
}

#[test]
fn validate_roll_checks_existence_before_range() {
    // Both conditions hold; the existence error must win.
    assert!(matches!(
        validate_roll(None, 99).unwrap_err(),
        DomainError::Validation(ValidationKind::NoActiveGame, _)
    ));
}

#[test]
fn validate_frame_accepts_legal_pair() {
    assert!(validate_frame(false, &[4, 5]).is_ok());
    assert!(validate_frame(false, &[0, 10]).is_ok());
    assert!(validate_frame(false, &[5, 5]).is_ok());
}

#[test]
fn validate_frame_rejects_illegal_pair_with_both_values() {
    assert_eq!(
        validate_frame(false, &[6, 7]).unwrap_err(),
        DomainError::validation(
            ValidationKind::InvalidFrameSum,
            "Invalid frame: 6 + 7 = 13 > 10"
        )
    );
}

#[test]
fn validate_frame_skips_single_roll_buffers() {
    assert!(validate_frame(false, &[7]).is_ok());
}

#[test]
fn validate_frame_skips_last_frame_bonus_combinations() {
    // Strike + strike + strike, spare + strike: legal in the tenth frame
    assert!(validate_frame(true, &[10, 10, 10]).is_ok());
    assert!(validate_frame(true, &[5, 5, 10]).is_ok());
    assert!(validate_frame(true, &[7, 6]).is_ok());
}

#[test]
fn regular_frame_completes_on_strike() {
    assert!(is_frame_complete(false, &[10]));
}

#[test]
fn regular_frame_completes_after_two_rolls() {
    assert!(!is_frame_complete(false, &[4]));
    assert!(is_frame_complete(false, &[4, 5]));
}

#[test]
fn empty_buffer_is_never_complete() {
    assert!(!is_frame_complete(false, &[]));
    assert!(!is_frame_complete(true, &[]));
}

#[test]
fn last_frame_rule_table() {
    // roll1 | roll2 | rolls so far | complete?
    assert!(!is_frame_complete(true, &[10]));
    assert!(!is_frame_complete(true, &[10, 10]));
    assert!(is_frame_complete(true, &[10, 10, 10]));
    assert!(!is_frame_complete(true, &[7, 3]));
    assert!(is_frame_complete(true, &[7, 3, 5]));
    assert!(is_frame_complete(true, &[7, 2]));
    assert!(is_frame_complete(true, &[4, 3]));
    assert!(!is_frame_complete(true, &[0, 10]));
    assert!(is_frame_complete(true, &[0, 10, 0]));
}

#[test]
fn roll_input_keeps_absent_rolls_as_none() {
    let input = build_roll_input(7, &[10]);
    assert_eq!(input.game_id, 7);
    assert_eq!(input.roll1, 10);
    assert_eq!(input.roll2, None);
    assert_eq!(input.roll3, None);

    let input = build_roll_input(7, &[4, 5]);
    assert_eq!(input.roll2, Some(5));
    assert_eq!(input.roll3, None);

    let input = build_roll_input(7, &[10, 10, 10]);
    assert_eq!(input.roll3, Some(10));
}

#[test]
fn roll_input_distinguishes_zero_pins_from_not_thrown() {
    let input = build_roll_input(7, &[0, 0]);
    assert_eq!(input.roll1, 0);
    assert_eq!(input.roll2, Some(0));
    assert_eq!(input.roll3, None);
}
