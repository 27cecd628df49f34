//! Error codes for the scorekeeper client.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! surfaced alongside user-facing messages.

use core::fmt;

/// Centralized error codes for the scorekeeper client.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Roll validation
    /// No game is in progress
    NoActiveGame,
    /// The game is already complete
    GameComplete,
    /// Pin count outside the legal range
    InvalidPinCount,
    /// Two in-range rolls summing past the pin count
    InvalidFrameSum,
    /// General validation error
    ValidationError,

    // Submission
    /// Frame submission to the scoring service failed
    SubmissionFailed,

    // Resource not found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Transport
    /// Request to the scoring service timed out
    Timeout,
    /// Scoring service unreachable
    ServiceUnavailable,
    /// Scoring service returned an unusable response
    BadResponse,

    // System
    /// Configuration error
    ConfigError,
    /// Internal error
    InternalError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Roll validation
            Self::NoActiveGame => "NO_ACTIVE_GAME",
            Self::GameComplete => "GAME_COMPLETE",
            Self::InvalidPinCount => "INVALID_PIN_COUNT",
            Self::InvalidFrameSum => "INVALID_FRAME_SUM",
            Self::ValidationError => "VALIDATION_ERROR",

            // Submission
            Self::SubmissionFailed => "SUBMISSION_FAILED",

            // Resource not found
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Transport
            Self::Timeout => "TIMEOUT",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::BadResponse => "BAD_RESPONSE",

            // System
            Self::ConfigError => "CONFIG_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
