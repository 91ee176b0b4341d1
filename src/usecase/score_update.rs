//! UseCase: scoreboard updates.
//!
//! Broadcast-then-persist: the canonical scoreboard is broadcast to the
//! whole room first, then a detached task replaces the persisted
//! scoreboard. Storage failures are observed in the log only and can
//! never fail or delay the broadcast. A crash between broadcast and
//! persist loses the update durably; that is the consistency contract of
//! a live quiz scoreboard.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::{
    ConnectionId, RepositoryError, Room, RoomCode, RoomPusher, RoomRepository, ScoreEntry,
};

pub struct ScoreUpdateUseCase {
    room_repository: Arc<dyn RoomRepository>,
    pusher: Arc<dyn RoomPusher>,
}

impl ScoreUpdateUseCase {
    pub fn new(room_repository: Arc<dyn RoomRepository>, pusher: Arc<dyn RoomPusher>) -> Self {
        Self {
            room_repository,
            pusher,
        }
    }

    /// Single authorization choke point for score updates.
    ///
    /// Today any holder of a room code may replace its scoreboard without
    /// having joined; membership is not re-verified. Tighten here if that
    /// changes.
    fn is_authorized(&self, _connection_id: &ConnectionId, _code: &RoomCode) -> bool {
        true
    }

    /// Broadcast an already-normalized scoreboard to the room, then kick
    /// off its persistence.
    ///
    /// `json_message` is the pre-serialized scoreboard-update frame built
    /// at the protocol boundary. Returns the handle of the persistence
    /// task; callers on the broadcast path drop it, tests may await it.
    /// `None` means the update was not authorized and nothing happened.
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        code: &RoomCode,
        scoreboard: Vec<ScoreEntry>,
        json_message: String,
    ) -> Option<JoinHandle<()>> {
        if !self.is_authorized(connection_id, code) {
            tracing::warn!(
                "Connection '{}' not authorized to update room '{}'",
                connection_id,
                code
            );
            return None;
        }

        // Broadcast first; the update is visible before it is durable.
        if let Err(e) = self.pusher.broadcast_room(code, &json_message).await {
            tracing::warn!("Failed to broadcast scoreboard for room '{}': {}", code, e);
        }

        let repository = Arc::clone(&self.room_repository);
        let code = code.clone();
        Some(tokio::spawn(async move {
            match repository.save_scoreboard(&code, scoreboard).await {
                Ok(Some(_)) => {
                    tracing::debug!("Persisted scoreboard for room '{}'", code);
                }
                Ok(None) => {
                    tracing::warn!("Room '{}' not found, scoreboard not persisted", code);
                }
                Err(e) => {
                    tracing::error!("Failed to persist scoreboard for room '{}': {}", code, e);
                }
            }
        }))
    }

    /// Synchronous persistence for the REST fallback path (no live
    /// connection, no broadcast). Returns the updated room, or `None`
    /// when no room matches the code.
    pub async fn persist_now(
        &self,
        code: &RoomCode,
        scoreboard: Vec<ScoreEntry>,
    ) -> Result<Option<Room>, RepositoryError> {
        self.room_repository.save_scoreboard(code, scoreboard).await
    }
}
