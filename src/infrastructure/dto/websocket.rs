//! WebSocket event DTOs.
//!
//! Events are framed as JSON text messages with a kebab-case `type` tag
//! and camelCase fields.

use serde::{Deserialize, Serialize};

use crate::domain::ScoreboardPayload;

/// Events a client may send after the connection gate admitted it.
///
/// Frames that do not parse into one of these shapes are client bugs and
/// are ignored, not answered.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    #[serde(rename_all = "camelCase")]
    JoinRoom {
        room_code: String,
        #[serde(default)]
        requester: Option<RequesterDto>,
    },
    #[serde(rename_all = "camelCase")]
    RoomScoreUpdate {
        room_code: String,
        scoreboard: ScoreboardPayload,
    },
    #[serde(rename_all = "camelCase")]
    LeaveRoom { room_code: String },
}

/// The identity a joining client asks to appear as.
///
/// Only the display name is honored; the subject id always comes from
/// the authenticated session.
#[derive(Debug, Deserialize)]
pub struct RequesterDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Server-to-client event types
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    ScoreboardUpdate,
    UserJoined,
    RoomError,
}

/// One canonical scoreboard entry on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntryDto {
    pub name: String,
    pub score: f64,
}

/// Full-scoreboard broadcast; also pushed to a joiner right after a
/// successful join.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardUpdateMessage {
    pub r#type: MessageType,
    pub room_code: String,
    pub scoreboard: Vec<ScoreEntryDto>,
}

/// Presence broadcast sent to the whole room, the joiner included.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserJoinedMessage {
    pub r#type: MessageType,
    pub subject_id: String,
    pub display_name: String,
    pub room_code: String,
}

/// Join failure reported to the requesting connection only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomErrorMessage {
    pub r#type: MessageType,
    pub message: String,
}

impl RoomErrorMessage {
    pub fn new(message: String) -> Self {
        Self {
            r#type: MessageType::RoomError,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize_scoreboard;

    #[test]
    fn test_join_room_event_parses() {
        // given:
        let raw = r#"{"type":"join-room","roomCode":"AB12","requester":{"id":"u1","name":"alice"}}"#;

        // when:
        let msg: ClientMessage = serde_json::from_str(raw).unwrap();

        // then:
        match msg {
            ClientMessage::JoinRoom {
                room_code,
                requester,
            } => {
                assert_eq!(room_code, "AB12");
                let requester = requester.unwrap();
                assert_eq!(requester.id.as_deref(), Some("u1"));
                assert_eq!(requester.name.as_deref(), Some("alice"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_join_room_event_without_requester_parses() {
        // given:
        let raw = r#"{"type":"join-room","roomCode":"AB12"}"#;

        // when:
        let msg: ClientMessage = serde_json::from_str(raw).unwrap();

        // then:
        assert!(matches!(
            msg,
            ClientMessage::JoinRoom {
                requester: None,
                ..
            }
        ));
    }

    #[test]
    fn test_score_update_accepts_both_scoreboard_shapes() {
        // given:
        let as_list =
            r#"{"type":"room-score-update","roomCode":"AB12","scoreboard":[{"name":"a","score":1}]}"#;
        let as_map = r#"{"type":"room-score-update","roomCode":"AB12","scoreboard":{"a":1}}"#;

        // when / then:
        for raw in [as_list, as_map] {
            let msg: ClientMessage = serde_json::from_str(raw).unwrap();
            match msg {
                ClientMessage::RoomScoreUpdate { scoreboard, .. } => {
                    let normalized = normalize_scoreboard(scoreboard);
                    assert_eq!(normalized.len(), 1);
                    assert_eq!(normalized[0].name, "a");
                    assert_eq!(normalized[0].score, 1.0);
                }
                other => panic!("unexpected message: {other:?}"),
            }
        }
    }

    #[test]
    fn test_event_missing_room_code_fails_to_parse() {
        // given:
        let raw = r#"{"type":"leave-room"}"#;

        // when:
        let result = serde_json::from_str::<ClientMessage>(raw);

        // then: treated as a malformed frame upstream
        assert!(result.is_err());
    }

    #[test]
    fn test_server_events_serialize_with_kebab_case_tags() {
        // given:
        let msg = ScoreboardUpdateMessage {
            r#type: MessageType::ScoreboardUpdate,
            room_code: "AB12".to_string(),
            scoreboard: vec![ScoreEntryDto {
                name: "alice".to_string(),
                score: 0.0,
            }],
        };

        // when:
        let json = serde_json::to_value(&msg).unwrap();

        // then:
        assert_eq!(json["type"], "scoreboard-update");
        assert_eq!(json["roomCode"], "AB12");
        assert_eq!(json["scoreboard"][0]["name"], "alice");
    }

    #[test]
    fn test_room_error_serializes() {
        // when:
        let json = serde_json::to_value(RoomErrorMessage::new("Room not found".to_string())).unwrap();

        // then:
        assert_eq!(json["type"], "room-error");
        assert_eq!(json["message"], "Room not found");
    }
}
