use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;

/// Application-level error surfaced to the caller/UI layer.
///
/// Every variant carries a ready-to-render message; no internal detail
/// leaks beyond the message string. Domain code constructs `DomainError`
/// and relies on the `From` impl below.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Submission failed: {detail}")]
    Submission { detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Request timed out: {detail}")]
    Timeout { detail: String },
    #[error("Service unavailable: {detail}")]
    ServiceUnavailable { detail: String },
    #[error("Bad response: {detail}")]
    BadResponse { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Canonical code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::Submission { .. } => ErrorCode::SubmissionFailed,
            AppError::NotFound { code, .. } => *code,
            AppError::Timeout { .. } => ErrorCode::Timeout,
            AppError::ServiceUnavailable { .. } => ErrorCode::ServiceUnavailable,
            AppError::BadResponse { .. } => ErrorCode::BadResponse,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::InternalError,
        }
    }

    /// The user-facing message carried by this error
    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::Submission { detail }
            | AppError::NotFound { detail, .. }
            | AppError::Timeout { detail }
            | AppError::ServiceUnavailable { detail }
            | AppError::BadResponse { detail }
            | AppError::Config { detail }
            | AppError::Internal { detail } => detail,
        }
    }

    pub fn submission(detail: impl Into<String>) -> Self {
        Self::Submission {
            detail: detail.into(),
        }
    }

    pub fn bad_response(detail: impl Into<String>) -> Self {
        Self::BadResponse {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::NoActiveGame => ErrorCode::NoActiveGame,
                    ValidationKind::GameComplete => ErrorCode::GameComplete,
                    ValidationKind::InvalidPinCount => ErrorCode::InvalidPinCount,
                    ValidationKind::InvalidFrameSum => ErrorCode::InvalidFrameSum,
                    ValidationKind::Other(_) => ErrorCode::ValidationError,
                };
                AppError::Validation { code, detail }
            }
            DomainError::Submission(detail) => AppError::Submission { detail },
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Game => ErrorCode::GameNotFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::NotFound { code, detail }
            }
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::Timeout => AppError::Timeout { detail },
                InfraErrorKind::ServiceUnavailable => AppError::ServiceUnavailable { detail },
                InfraErrorKind::BadResponse => AppError::BadResponse { detail },
                InfraErrorKind::Other(_) => AppError::Internal { detail },
            },
        }
    }
}
