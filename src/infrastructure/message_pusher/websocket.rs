//! WebSocket implementation of `RoomPusher`.
//!
//! Owns the connection senders and the room-code → connection-set
//! membership map. WebSocket creation happens in the UI layer
//! (`src/ui/handler/websocket.rs`); this implementation receives the
//! resulting `UnboundedSender` and uses it for delivery, keeping
//! connection acceptance and message delivery separated.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, MessagePushError, PusherChannel, RoomCode, RoomPusher};

#[derive(Default)]
struct PusherState {
    /// Sender for each live connection.
    connections: HashMap<ConnectionId, PusherChannel>,
    /// Broadcast groups: which connections are currently in which room.
    rooms: HashMap<RoomCode, HashSet<ConnectionId>>,
}

/// WebSocket-backed room pusher.
///
/// A single mutex guards both maps so membership changes and broadcasts
/// for a room are serialized against each other; per-room broadcast order
/// therefore equals processing order.
pub struct WebSocketRoomPusher {
    state: Mutex<PusherState>,
}

impl WebSocketRoomPusher {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PusherState::default()),
        }
    }
}

impl Default for WebSocketRoomPusher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomPusher for WebSocketRoomPusher {
    async fn register_connection(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut state = self.state.lock().await;
        state.connections.insert(connection_id.clone(), sender);
        tracing::debug!("Connection '{}' registered", connection_id);
    }

    async fn unregister_connection(&self, connection_id: &ConnectionId) {
        let mut state = self.state.lock().await;
        state.connections.remove(connection_id);
        state.rooms.retain(|code, members| {
            if members.remove(connection_id) {
                tracing::debug!("Connection '{}' left room '{}'", connection_id, code);
            }
            !members.is_empty()
        });
        tracing::debug!("Connection '{}' unregistered", connection_id);
    }

    async fn join_room(&self, connection_id: &ConnectionId, code: &RoomCode) {
        let mut state = self.state.lock().await;
        state
            .rooms
            .entry(code.clone())
            .or_default()
            .insert(connection_id.clone());
        tracing::debug!("Connection '{}' joined room '{}'", connection_id, code);
    }

    async fn leave_room(&self, connection_id: &ConnectionId, code: &RoomCode) {
        let mut state = self.state.lock().await;
        if let Some(members) = state.rooms.get_mut(code) {
            members.remove(connection_id);
            if members.is_empty() {
                state.rooms.remove(code);
            }
        }
        tracing::debug!("Connection '{}' left room '{}'", connection_id, code);
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError> {
        let state = self.state.lock().await;

        if let Some(sender) = state.connections.get(connection_id) {
            sender
                .send(content.to_string())
                .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
            tracing::debug!("Pushed message to connection '{}'", connection_id);
            Ok(())
        } else {
            Err(MessagePushError::ConnectionNotFound(
                connection_id.to_string(),
            ))
        }
    }

    async fn broadcast_room(&self, code: &RoomCode, content: &str) -> Result<(), MessagePushError> {
        let state = self.state.lock().await;

        let Some(members) = state.rooms.get(code) else {
            tracing::debug!("No connections in room '{}', skipping broadcast", code);
            return Ok(());
        };

        for connection_id in members {
            match state.connections.get(connection_id) {
                // Partial send failures are tolerated during broadcast
                Some(sender) => {
                    if let Err(e) = sender.send(content.to_string()) {
                        tracing::warn!(
                            "Failed to push message to connection '{}': {}",
                            connection_id,
                            e
                        );
                    }
                }
                None => {
                    tracing::warn!(
                        "Connection '{}' in room '{}' has no sender, skipping",
                        connection_id,
                        code
                    );
                }
            }
        }

        Ok(())
    }
}
