//! Wire DTOs for the bowling service JSON contract.
//!
//! Domain types stay serde-free; everything crossing the HTTP boundary
//! is mapped through the camelCase types in this module.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::rolls::RollInput;
use crate::domain::state::{Frame, Game};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDto {
    pub id: i64,
    pub game_id: i64,
    pub frame_index: u8,
    pub roll1: Option<u8>,
    pub roll2: Option<u8>,
    pub roll3: Option<u8>,
    pub score: i32,
    pub is_strike: bool,
    pub is_spare: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: i64,
    pub name: String,
    pub frames: Vec<FrameDto>,
    pub current_frame_number: u8,
    pub is_game_over: bool,
}

/// Completed-frame submission payload.
///
/// `roll2`/`roll3` must serialize as explicit nulls when absent - the
/// service distinguishes "not thrown" from "zero pins" - so no
/// `skip_serializing_if` here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollInputDto {
    pub game_id: i64,
    pub roll1: u8,
    pub roll2: Option<u8>,
    pub roll3: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollResultDto {
    pub is_success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub state: Option<GameDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameRequest {
    pub game_name: String,
}

/// One highscore list entry, served and rendered as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighscoreEntry {
    pub name: String,
    pub score: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub date_achieved: OffsetDateTime,
}

impl From<FrameDto> for Frame {
    fn from(dto: FrameDto) -> Self {
        Frame {
            id: dto.id,
            game_id: dto.game_id,
            frame_index: dto.frame_index,
            roll1: dto.roll1,
            roll2: dto.roll2,
            roll3: dto.roll3,
            score: dto.score,
            is_strike: dto.is_strike,
            is_spare: dto.is_spare,
        }
    }
}

impl From<GameDto> for Game {
    fn from(dto: GameDto) -> Self {
        Game {
            id: dto.id,
            name: dto.name,
            frames: dto.frames.into_iter().map(Frame::from).collect(),
            current_frame_number: dto.current_frame_number,
            is_game_over: dto.is_game_over,
        }
    }
}

impl From<RollInput> for RollInputDto {
    fn from(input: RollInput) -> Self {
        RollInputDto {
            game_id: input.game_id,
            roll1: input.roll1,
            roll2: input.roll2,
            roll3: input.roll3,
        }
    }
}
