//! Map reqwest transport failures onto domain error kinds.

use reqwest::StatusCode;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// Central mapping from transport errors to `DomainError`.
///
/// Every branch carries a ready-to-render message; raw reqwest detail
/// only survives inside the infra kind, not the message.
pub fn map_transport_err(err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        return DomainError::infra(
            InfraErrorKind::Timeout,
            "Failed to communicate with bowling service.",
        );
    }
    if err.is_connect() {
        return DomainError::infra(
            InfraErrorKind::ServiceUnavailable,
            "Failed to communicate with bowling service.",
        );
    }
    if let Some(status) = err.status() {
        if status == StatusCode::NOT_FOUND {
            return DomainError::not_found(NotFoundKind::Game, "Game not found.");
        }
        return DomainError::infra(
            InfraErrorKind::BadResponse,
            format!("Bowling service returned {status}."),
        );
    }
    if err.is_decode() {
        return DomainError::infra(
            InfraErrorKind::BadResponse,
            "Bowling service returned an unreadable response.",
        );
    }
    DomainError::infra(
        InfraErrorKind::Other(err.to_string()),
        "Failed to communicate with bowling service.",
    )
}
