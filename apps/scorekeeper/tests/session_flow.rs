//! End-to-end session flows against the in-memory mock authority.
//!
//! The mock plays the role of the remote scoring service, so these tests
//! verify the full record → submit → adopt loop including bonus-aware
//! totals coming back from the authority.

mod support;

use std::sync::Arc;

use scorekeeper::error::AppError;
use scorekeeper::errors::ErrorCode;
use scorekeeper::services::{GameSession, RollProgress};

use crate::support::mock_authority::MockAuthority;

fn new_session() -> (Arc<MockAuthority>, GameSession) {
    let authority = Arc::new(MockAuthority::new());
    let session = GameSession::new(authority.clone());
    (authority, session)
}

#[tokio::test]
async fn start_game_yields_empty_scoreboard() {
    let (_, mut session) = new_session();
    let game = session.start_game("Testplayer").await.unwrap();
    assert_eq!(game.name, "Testplayer");
    assert!(game.frames.is_empty());
    assert!(!game.is_game_over);

    assert_eq!(session.total_score(), 0);
    let views = session.scoreboard();
    assert_eq!(views.len(), 10);
    assert!(views.iter().all(|v| v.roll1.is_empty() && v.score.is_none()));
}

#[tokio::test]
async fn spare_then_open_frame_gets_bonus_aware_totals() {
    let (_, mut session) = new_session();
    session.start_game("Testplayer").await.unwrap();

    assert_eq!(session.roll(7).await.unwrap(), RollProgress::FrameOpen);
    assert_eq!(session.roll(3).await.unwrap(), RollProgress::FrameScored);
    // No bonus roll yet: the spare frame provisionally scores 10
    assert_eq!(session.total_score(), 10);

    session.roll(4).await.unwrap();
    session.roll(2).await.unwrap();

    let frames = &session.current_game().unwrap().frames;
    assert_eq!(frames[0].score, 14);
    assert_eq!(frames[1].score, 6);
    assert_eq!(session.total_score(), 20);

    let views = session.scoreboard();
    assert_eq!(views[0].score, Some(14));
    assert_eq!(views[1].score, Some(20));

    assert_eq!(session.cumulative_score_through(0), 14);
    assert_eq!(session.cumulative_score_through(1), 20);
}

#[tokio::test]
async fn perfect_game_scores_three_hundred() {
    let (_, mut session) = new_session();
    session.start_game("Testplayer").await.unwrap();

    for _ in 0..9 {
        assert_eq!(session.roll(10).await.unwrap(), RollProgress::FrameScored);
    }
    assert_eq!(session.roll(10).await.unwrap(), RollProgress::FrameOpen);
    assert_eq!(session.roll(10).await.unwrap(), RollProgress::FrameOpen);
    assert_eq!(session.roll(10).await.unwrap(), RollProgress::FrameScored);

    assert!(session.is_game_over());
    assert_eq!(session.total_score(), 300);

    // The game is complete; further rolls are rejected
    let err = session.roll(5).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameComplete);
    assert_eq!(err.detail(), "Game is already complete.");
}

#[tokio::test]
async fn all_spares_game_scores_one_fifty() {
    let (_, mut session) = new_session();
    session.start_game("Testplayer").await.unwrap();

    for _ in 0..9 {
        session.roll(5).await.unwrap();
        session.roll(5).await.unwrap();
    }
    session.roll(5).await.unwrap();
    session.roll(5).await.unwrap();
    assert_eq!(session.roll(5).await.unwrap(), RollProgress::FrameScored);

    assert!(session.is_game_over());
    assert_eq!(session.total_score(), 150);
}

#[tokio::test]
async fn illegal_sum_is_rejected_and_frame_restarts() {
    let (_, mut session) = new_session();
    session.start_game("Testplayer").await.unwrap();

    session.roll(6).await.unwrap();
    let err = session.roll(7).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidFrameSum);
    assert_eq!(err.detail(), "Invalid frame: 6 + 7 = 13 > 10");

    // Whole buffer cleared; nothing was submitted
    assert!(session.current_frame_rolls().is_empty());
    assert!(session.current_game().unwrap().frames.is_empty());

    // The player re-enters the frame from scratch
    session.roll(6).await.unwrap();
    assert_eq!(session.roll(3).await.unwrap(), RollProgress::FrameScored);
    assert_eq!(session.total_score(), 9);
}

#[tokio::test]
async fn out_of_range_pins_leave_frame_untouched() {
    let (_, mut session) = new_session();
    session.start_game("Testplayer").await.unwrap();

    session.roll(6).await.unwrap();
    let err = session.roll(11).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPinCount);
    assert_eq!(err.detail(), "Pins must be between 0 and 10.");
    assert_eq!(session.current_frame_rolls(), &[6]);

    let err = session.roll(-1).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPinCount);
    assert_eq!(session.current_frame_rolls(), &[6]);
}

#[tokio::test]
async fn failed_submission_discards_frame_rolls() {
    let (authority, mut session) = new_session();
    session.start_game("Testplayer").await.unwrap();

    authority.fail_next_submission();
    let err = session.roll(10).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::SubmissionFailed);
    assert!(matches!(err, AppError::Submission { .. }));

    // Buffer stays cleared and the authority saw nothing durable
    assert!(session.current_frame_rolls().is_empty());
    assert!(session.current_game().unwrap().frames.is_empty());

    // Re-entering the frame succeeds
    assert_eq!(session.roll(10).await.unwrap(), RollProgress::FrameScored);
    assert_eq!(session.current_game().unwrap().frames.len(), 1);
}

#[tokio::test]
async fn tenth_frame_bonus_rolls_finish_the_game() {
    let (_, mut session) = new_session();
    session.start_game("Testplayer").await.unwrap();

    for _ in 0..9 {
        session.roll(1).await.unwrap();
        session.roll(1).await.unwrap();
    }

    assert_eq!(session.roll(7).await.unwrap(), RollProgress::FrameOpen);
    assert_eq!(session.roll(3).await.unwrap(), RollProgress::FrameOpen);
    assert_eq!(session.roll(5).await.unwrap(), RollProgress::FrameScored);

    let game = session.current_game().unwrap();
    assert!(game.is_game_over);
    assert_eq!(game.frames[9].roll3, Some(5));
    assert_eq!(session.total_score(), 18 + 15);
}

#[tokio::test]
async fn tenth_frame_open_pair_ends_without_bonus() {
    let (_, mut session) = new_session();
    session.start_game("Testplayer").await.unwrap();

    for _ in 0..9 {
        session.roll(1).await.unwrap();
        session.roll(1).await.unwrap();
    }

    session.roll(4).await.unwrap();
    assert_eq!(session.roll(3).await.unwrap(), RollProgress::FrameScored);
    assert!(session.is_game_over());
    assert_eq!(session.total_score(), 18 + 7);
}

#[tokio::test]
async fn scoreboard_shows_live_rolls_and_glyphs() {
    let (_, mut session) = new_session();
    session.start_game("Testplayer").await.unwrap();

    session.roll(10).await.unwrap();
    session.roll(7).await.unwrap();
    session.roll(3).await.unwrap();
    session.roll(5).await.unwrap();

    let views = session.scoreboard();
    assert_eq!(views[0].roll1, "X");
    assert_eq!(views[1].roll1, "7");
    assert_eq!(views[1].roll2, "/");
    // In-progress frame renders live, without a total
    assert_eq!(views[2].roll1, "5");
    assert_eq!(views[2].score, None);

    // Strike frame: 10 + 7 + 3; spare frame provisionally 10 because the
    // live 5 has not been submitted yet
    assert_eq!(views[0].score, Some(20));
    assert_eq!(views[1].score, Some(30));
}

#[tokio::test]
async fn unchanged_frames_survive_reconciliation_as_is() {
    let (_, mut session) = new_session();
    session.start_game("Testplayer").await.unwrap();

    // Open frame: its score can never change retroactively
    session.roll(4).await.unwrap();
    session.roll(2).await.unwrap();
    let before = session.current_game().unwrap().frames[0].clone();

    session.roll(3).await.unwrap();
    session.roll(3).await.unwrap();

    let frames = &session.current_game().unwrap().frames;
    assert_eq!(frames[0], before);

    // A strike frame's score does change once bonus rolls land
    session.roll(10).await.unwrap();
    let strike_score_before = session.current_game().unwrap().frames[2].score;
    session.roll(4).await.unwrap();
    session.roll(2).await.unwrap();
    let strike_score_after = session.current_game().unwrap().frames[2].score;
    assert_eq!(strike_score_before, 10);
    assert_eq!(strike_score_after, 16);
}

#[tokio::test]
async fn load_game_resumes_from_last_closed_frame() {
    let (authority, mut session) = new_session();
    let game_id = session.start_game("Testplayer").await.unwrap().id;
    session.roll(7).await.unwrap();
    session.roll(3).await.unwrap();

    let mut resumed = GameSession::new(authority.clone());
    let game = resumed.load_game(game_id).await.unwrap();
    assert_eq!(game.frames.len(), 1);
    assert!(game.frames[0].is_spare);
    assert!(resumed.current_frame_rolls().is_empty());
}

#[tokio::test]
async fn load_unknown_game_reports_not_found() {
    let (authority, _) = new_session();
    let mut session = GameSession::new(authority.clone());
    let err = session.load_game(999).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);
}

#[tokio::test]
async fn rolling_without_a_game_is_rejected() {
    let (_, mut session) = new_session();
    let err = session.roll(5).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoActiveGame);
    assert_eq!(err.detail(), "No active game. Please start a new game first.");
}
