//! Transport boundary to the remote bowling service.

pub mod authority;
pub mod dto;
pub mod http;
pub mod transport_errors;

pub use authority::{GameAuthority, RollResult};
pub use dto::HighscoreEntry;
pub use http::HttpGameAuthority;
