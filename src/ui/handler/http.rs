//! HTTP API handlers.
//!
//! The REST surface around the real-time core: room creation and lookup,
//! the non-real-time scoreboard fallback, and challenge lookup. Errors
//! are JSON bodies of the form `{ "error": "..." }`.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    domain::{AuthError, ChallengeFilter, RoomCode, ScoreboardPayload, Subject, normalize_scoreboard},
    infrastructure::dto::http::{
        ChallengeDto, CreateRoomRequest, ErrorResponse, RoomDto, SaveScoreboardRequest,
    },
    ui::state::AppState,
    usecase::{CreateRoomCommand, CreateRoomError},
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"ok": true}))
}

/// Verify the `Authorization: Bearer <token>` header through the same
/// identity verifier the connection gate uses.
async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Subject, AuthError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingCredential)?;
    state.verifier.verify(token).await
}

fn unauthorized(e: AuthError) -> Response {
    tracing::warn!("Rejecting request, credential invalid: {}", e);
    let body = match e {
        AuthError::MissingCredential => "No token",
        _ => "Invalid token",
    };
    (StatusCode::UNAUTHORIZED, Json(ErrorResponse::new(body))).into_response()
}

/// POST /api/v1/rooms/create
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<CreateRoomRequest>,
) -> Response {
    let creator = match authenticate(&state, &headers).await {
        Ok(subject) => subject,
        Err(e) => return unauthorized(e),
    };

    let command = CreateRoomCommand {
        mode: request.mode,
        challenge_id: request.challenge_id,
        filter: ChallengeFilter {
            tag: request.tag,
            difficulty: request.difficulty,
        },
    };

    match state.create_room_usecase.execute(&creator, command).await {
        Ok(room) => (StatusCode::CREATED, Json(RoomDto::from(&room))).into_response(),
        Err(CreateRoomError::ChallengeNotFound(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Provided challengeId not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("rooms/create error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to create room")),
            )
                .into_response()
        }
    }
}

/// GET /api/v1/rooms (debug/admin listing)
pub async fn list_rooms(State(state): State<Arc<AppState>>) -> Response {
    match state.room_query_usecase.list_recent().await {
        Ok(rooms) => Json(rooms.iter().map(RoomDto::from).collect::<Vec<_>>()).into_response(),
        Err(e) => {
            tracing::error!("rooms/list error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to list rooms")),
            )
                .into_response()
        }
    }
}

/// GET /api/v1/rooms/{code}
pub async fn get_room(State(state): State<Arc<AppState>>, Path(code): Path<String>) -> Response {
    let Ok(code) = RoomCode::new(code) else {
        return (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not found"))).into_response();
    };

    match state.room_query_usecase.get_by_code(&code).await {
        Ok(Some(room)) => Json(RoomDto::from(&room)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not found"))).into_response(),
        Err(e) => {
            tracing::error!("rooms/get error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch room")),
            )
                .into_response()
        }
    }
}

/// POST /api/v1/rooms/{code}/scoreboard
///
/// The non-real-time fallback path: normalizes and persists
/// synchronously, returns the updated room, and never broadcasts.
pub async fn save_scoreboard(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    headers: HeaderMap,
    Json(request): Json<SaveScoreboardRequest>,
) -> Response {
    if let Err(e) = authenticate(&state, &headers).await {
        return unauthorized(e);
    }

    let Ok(code) = RoomCode::new(code) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Room not found")),
        )
            .into_response();
    };

    // A shape that is neither a list nor a mapping is a caller error on
    // this path, unlike the tolerant real-time path
    if matches!(request.scoreboard, ScoreboardPayload::Other(_)) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid scoreboard")),
        )
            .into_response();
    }
    let normalized = normalize_scoreboard(request.scoreboard);

    match state
        .score_update_usecase
        .persist_now(&code, normalized)
        .await
    {
        Ok(Some(room)) => Json(RoomDto::from(&room)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Room not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("rooms/scoreboard error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to save scoreboard")),
            )
                .into_response()
        }
    }
}

/// GET /api/v1/challenges/{id}
pub async fn get_challenge(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.challenge_query_usecase.get_by_id(&id).await {
        Ok(Some(challenge)) => Json(ChallengeDto::from(&challenge)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not found"))).into_response(),
        Err(e) => {
            tracing::error!("challenges/get error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch challenge")),
            )
                .into_response()
        }
    }
}
