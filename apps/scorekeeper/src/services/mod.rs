//! Client-side orchestration services.

pub mod highscores;
pub mod session;

pub use highscores::HighscoreService;
pub use session::{GameSession, RollProgress};
