//! HTTP API request/response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::ScoreboardPayload;

use super::websocket::ScoreEntryDto;

/// JSON error body, `{ "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub subject_id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub code: String,
    pub mode: String,
    pub participants: Vec<ParticipantDto>,
    pub scoreboard: Vec<ScoreEntryDto>,
    pub challenge_id: Option<String>,
    pub created_by: String,
    pub created_at: String,
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub question_type: String,
    pub options: Vec<String>,
    pub answer_index: Option<u32>,
    pub starter_code: String,
    pub tests: Vec<String>,
    pub time_limit: u32,
    pub tags: Vec<String>,
}

/// Body of `POST /api/v1/rooms/create`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub challenge_id: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Body of `POST /api/v1/rooms/{code}/scoreboard`, the non-real-time
/// fallback path.
#[derive(Debug, Deserialize)]
pub struct SaveScoreboardRequest {
    pub scoreboard: ScoreboardPayload,
}
