#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use api::{GameAuthority, HighscoreEntry, HttpGameAuthority, RollResult};
pub use config::Config;
pub use domain::{Frame, Game, GameId, RollBuffer, RollInput, RollOutcome, RollSlot};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::{GameSession, HighscoreService, RollProgress};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
