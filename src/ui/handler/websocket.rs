//! WebSocket connection gate and event loop.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, RoomCode, Subject, normalize_scoreboard},
    infrastructure::dto::websocket::{
        ClientMessage, RoomErrorMessage, ScoreboardUpdateMessage, UserJoinedMessage,
    },
    ui::state::AppState,
    usecase::JoinRoomError,
};

/// Query parameters of the upgrade request. The bearer credential rides
/// on the handshake; there is no way to authenticate later.
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    #[serde(default)]
    pub token: Option<String>,
}

/// Connection gate: authenticate the handshake before the upgrade.
///
/// Runs exactly once per connection attempt. A missing or rejected
/// credential refuses the upgrade outright; no event handler ever runs
/// for that connection.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let Some(token) = query.token.filter(|t| !t.is_empty()) else {
        tracing::warn!("Rejecting WebSocket handshake without credential");
        return Err(StatusCode::UNAUTHORIZED);
    };

    let subject = match state.verifier.verify(&token).await {
        Ok(subject) => subject,
        Err(e) => {
            tracing::warn!("Rejecting WebSocket handshake, credential invalid: {}", e);
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    tracing::info!("Subject '{}' authenticated for WebSocket session", subject.id);
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, subject)))
}

/// Spawns the task that drains the connection's outbound channel into
/// the WebSocket sink. All pushes and broadcasts for this connection
/// funnel through that channel.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

pub async fn handle_socket(socket: WebSocket, state: Arc<AppState>, subject: Subject) {
    let connection_id = ConnectionId::generate();
    let (tx, rx) = mpsc::unbounded_channel();
    state
        .pusher
        .register_connection(connection_id.clone(), tx)
        .await;
    tracing::info!(
        "Connection '{}' opened for subject '{}'",
        connection_id,
        subject.id
    );

    let (sender, mut receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();
    let connection_id_clone = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_event(&state_clone, &connection_id_clone, &subject, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id_clone);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Implicit leave from every joined room
    state.disconnect_usecase.disconnect(&connection_id).await;
}

/// Dispatch one client frame. Frames that do not parse, and frames with
/// an unusable room code where no join is in play, are client bugs:
/// ignored, never answered.
async fn handle_event(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
    subject: &Subject,
    text: &str,
) {
    let event = match serde_json::from_str::<ClientMessage>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!("Ignoring malformed frame: {}", e);
            return;
        }
    };

    match event {
        ClientMessage::JoinRoom {
            room_code,
            requester,
        } => {
            let Ok(code) = RoomCode::new(room_code) else {
                // An unusable code can never match a room
                send_room_error(state, connection_id, "Room not found").await;
                return;
            };
            let requested_name = requester.and_then(|r| r.name);
            join_room(state, connection_id, subject, &code, requested_name).await;
        }
        ClientMessage::RoomScoreUpdate {
            room_code,
            scoreboard,
        } => {
            let Ok(code) = RoomCode::new(room_code) else {
                tracing::debug!("Ignoring score update with unusable room code");
                return;
            };
            // The single conversion point: canonical form from here on
            let normalized = normalize_scoreboard(scoreboard);
            let frame =
                serde_json::to_string(&ScoreboardUpdateMessage::new(&code, &normalized)).unwrap();
            let _persistence = state
                .score_update_usecase
                .execute(connection_id, &code, normalized, frame)
                .await;
        }
        ClientMessage::LeaveRoom { room_code } => {
            let Ok(code) = RoomCode::new(room_code) else {
                tracing::debug!("Ignoring leave request with unusable room code");
                return;
            };
            state.disconnect_usecase.leave(connection_id, &code).await;
        }
    }
}

async fn join_room(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
    subject: &Subject,
    code: &RoomCode,
    requested_name: Option<String>,
) {
    match state
        .join_room_usecase
        .execute(connection_id, subject, code, requested_name)
        .await
    {
        Ok((room, participant)) => {
            // Current scoreboard to the joiner only
            let scoreboard_frame =
                serde_json::to_string(&ScoreboardUpdateMessage::new(code, &room.scoreboard))
                    .unwrap();
            if let Err(e) = state.pusher.push_to(connection_id, &scoreboard_frame).await {
                tracing::warn!("Failed to send scoreboard to '{}': {}", connection_id, e);
            }

            // Presence to the whole room, the joiner included
            let joined_frame = serde_json::to_string(&UserJoinedMessage::new(
                participant.subject_id,
                participant.display_name,
                code,
            ))
            .unwrap();
            if let Err(e) = state.pusher.broadcast_room(code, &joined_frame).await {
                tracing::warn!("Failed to broadcast user-joined for '{}': {}", code, e);
            }
        }
        Err(JoinRoomError::RoomNotFound(_)) => {
            tracing::info!("Join rejected, room '{}' not found", code);
            send_room_error(state, connection_id, "Room not found").await;
        }
        Err(JoinRoomError::Storage(e)) => {
            tracing::error!("Join failed for room '{}': {}", code, e);
            send_room_error(state, connection_id, "Failed to join room").await;
        }
    }
}

async fn send_room_error(state: &Arc<AppState>, connection_id: &ConnectionId, message: &str) {
    let frame = serde_json::to_string(&RoomErrorMessage::new(message.to_string())).unwrap();
    if let Err(e) = state.pusher.push_to(connection_id, &frame).await {
        tracing::warn!("Failed to send room-error to '{}': {}", connection_id, e);
    }
}
