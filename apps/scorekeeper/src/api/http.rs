//! reqwest adapter for the bowling service HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::api::authority::{GameAuthority, RollResult};
use crate::api::dto::{GameDto, HighscoreEntry, RollInputDto, RollResultDto, StartGameRequest};
use crate::api::transport_errors::map_transport_err;
use crate::config::Config;
use crate::domain::rolls::RollInput;
use crate::domain::state::{Game, GameId};
use crate::error::AppError;

/// HTTP implementation of `GameAuthority`.
pub struct HttpGameAuthority {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGameAuthority {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl GameAuthority for HttpGameAuthority {
    async fn start_game(&self, name: &str) -> Result<Game, AppError> {
        debug!(name, "Requesting new game");
        let dto: GameDto = self
            .client
            .post(self.url("/start"))
            .json(&StartGameRequest {
                game_name: name.to_string(),
            })
            .send()
            .await
            .map_err(map_transport_err)?
            .error_for_status()
            .map_err(map_transport_err)?
            .json()
            .await
            .map_err(map_transport_err)?;
        Ok(dto.into())
    }

    async fn load_game(&self, game_id: GameId) -> Result<Game, AppError> {
        debug!(game_id, "Loading game");
        let dto: GameDto = self
            .client
            .get(self.url(&format!("/games/{game_id}")))
            .send()
            .await
            .map_err(map_transport_err)?
            .error_for_status()
            .map_err(map_transport_err)?
            .json()
            .await
            .map_err(map_transport_err)?;
        Ok(dto.into())
    }

    async fn submit_frame(&self, input: RollInput) -> Result<RollResult, AppError> {
        debug!(game_id = input.game_id, "Posting completed frame");
        let dto: RollResultDto = self
            .client
            .post(self.url("/turn"))
            .json(&RollInputDto::from(input))
            .send()
            .await
            .map_err(map_transport_err)?
            .error_for_status()
            .map_err(map_transport_err)?
            .json()
            .await
            .map_err(map_transport_err)?;

        Ok(RollResult {
            is_success: dto.is_success,
            error_message: dto.error_message,
            state: dto.state.map(Game::from),
        })
    }

    async fn list_highscores(&self) -> Result<Vec<HighscoreEntry>, AppError> {
        debug!("Fetching highscores");
        let scores: Vec<HighscoreEntry> = self
            .client
            .get(self.url("/highscores"))
            .send()
            .await
            .map_err(map_transport_err)?
            .error_for_status()
            .map_err(map_transport_err)?
            .json()
            .await
            .map_err(map_transport_err)?;
        Ok(scores)
    }
}
