// Unit tests for error mapping - pure domain logic without transport dependencies
use crate::errors::domain::{
    DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_kinds_to_codes() {
    let cases = [
        (ValidationKind::NoActiveGame, ErrorCode::NoActiveGame),
        (ValidationKind::GameComplete, ErrorCode::GameComplete),
        (ValidationKind::InvalidPinCount, ErrorCode::InvalidPinCount),
        (ValidationKind::InvalidFrameSum, ErrorCode::InvalidFrameSum),
        (
            ValidationKind::Other("VALIDATION_ERROR".into()),
            ErrorCode::ValidationError,
        ),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "bad roll").into();
        assert_eq!(app.code(), code);
        assert_eq!(app.detail(), "bad roll");
    }
}

#[test]
fn maps_submission() {
    let de = DomainError::submission("Failed to add throw. Please try again.");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::SubmissionFailed);
    assert_eq!(app.detail(), "Failed to add throw. Please try again.");
    assert!(matches!(app, AppError::Submission { .. }));
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Game, "no game");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");

    let other = DomainError::not_found(NotFoundKind::Other("HIGHSCORES".into()), "no scores");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timed out");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "TIMEOUT");
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::ServiceUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "SERVICE_UNAVAILABLE");

    let bad = DomainError::infra(InfraErrorKind::BadResponse, "garbled");
    let app: AppError = bad.into();
    assert_eq!(app.code().as_str(), "BAD_RESPONSE");

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "INTERNAL_ERROR");
}

#[test]
fn domain_purity_check() {
    // Domain errors must be constructible and convertible without touching
    // any transport types.
    let validation = DomainError::validation(ValidationKind::InvalidPinCount, "test");
    let submission = DomainError::submission("test");
    let not_found = DomainError::not_found(NotFoundKind::Game, "test");
    let infra = DomainError::infra(InfraErrorKind::Timeout, "test");

    let _: AppError = validation.into();
    let _: AppError = submission.into();
    let _: AppError = not_found.into();
    let _: AppError = infra.into();
}

#[test]
fn constructor_helpers() {
    let validation = DomainError::validation(ValidationKind::GameComplete, "game over");
    assert!(matches!(
        validation,
        DomainError::Validation(ValidationKind::GameComplete, _)
    ));

    let other = DomainError::validation_other("odd input");
    assert!(matches!(other, DomainError::Validation(ValidationKind::Other(_), _)));
    assert_eq!(other.detail(), "odd input");

    let infra = DomainError::infra(InfraErrorKind::ServiceUnavailable, "down");
    assert!(matches!(
        infra,
        DomainError::Infra(InfraErrorKind::ServiceUnavailable, _)
    ));
}
