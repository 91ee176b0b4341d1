//! Conversion logic between DTOs and domain entities.

use crate::common::time::timestamp_to_rfc3339;
use crate::domain::{Challenge, Participant, Room, RoomCode, ScoreEntry};
use crate::infrastructure::dto::http as http_dto;
use crate::infrastructure::dto::websocket as ws_dto;

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&ScoreEntry> for ws_dto::ScoreEntryDto {
    fn from(entry: &ScoreEntry) -> Self {
        Self {
            name: entry.name.clone(),
            score: entry.score,
        }
    }
}

impl From<&Participant> for http_dto::ParticipantDto {
    fn from(participant: &Participant) -> Self {
        Self {
            subject_id: participant.subject_id.clone(),
            display_name: participant.display_name.clone(),
        }
    }
}

impl From<&Room> for http_dto::RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            code: room.code.as_str().to_string(),
            mode: room.mode.clone(),
            participants: room.participants.iter().map(Into::into).collect(),
            scoreboard: room.scoreboard.iter().map(Into::into).collect(),
            challenge_id: room.challenge_id.clone(),
            created_by: room.created_by.clone(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
            expires_at: room.expires_at.map(|t| timestamp_to_rfc3339(t.value())),
        }
    }
}

impl From<&Challenge> for http_dto::ChallengeDto {
    fn from(challenge: &Challenge) -> Self {
        Self {
            id: challenge.id.clone(),
            title: challenge.title.clone(),
            description: challenge.description.clone(),
            question_type: challenge.question_type.as_str().to_string(),
            options: challenge.options.clone(),
            answer_index: challenge.answer_index,
            starter_code: challenge.starter_code.clone(),
            tests: challenge.tests.clone(),
            time_limit: challenge.time_limit,
            tags: challenge.tags.clone(),
        }
    }
}

impl ws_dto::ScoreboardUpdateMessage {
    /// Build the canonical scoreboard event for a room.
    pub fn new(code: &RoomCode, scoreboard: &[ScoreEntry]) -> Self {
        Self {
            r#type: ws_dto::MessageType::ScoreboardUpdate,
            room_code: code.as_str().to_string(),
            scoreboard: scoreboard.iter().map(Into::into).collect(),
        }
    }
}

impl ws_dto::UserJoinedMessage {
    pub fn new(subject_id: String, display_name: String, code: &RoomCode) -> Self {
        Self {
            r#type: ws_dto::MessageType::UserJoined,
            subject_id,
            display_name,
            room_code: code.as_str().to_string(),
        }
    }
}
