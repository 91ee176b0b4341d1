//! UseCase: leaving rooms and dropping connections.
//!
//! Leaving only removes the connection from the broadcast group; the
//! room's participant list is append-only and is never retracted.

use std::sync::Arc;

use crate::domain::{ConnectionId, RoomCode, RoomPusher};

pub struct DisconnectParticipantUseCase {
    pusher: Arc<dyn RoomPusher>,
}

impl DisconnectParticipantUseCase {
    pub fn new(pusher: Arc<dyn RoomPusher>) -> Self {
        Self { pusher }
    }

    /// Explicit leave-room request for a single room.
    pub async fn leave(&self, connection_id: &ConnectionId, code: &RoomCode) {
        self.pusher.leave_room(connection_id, code).await;
        tracing::info!("Connection '{}' left room '{}'", connection_id, code);
    }

    /// Transport disconnect: implicit leave from every joined room and
    /// disposal of the connection's routing state.
    pub async fn disconnect(&self, connection_id: &ConnectionId) {
        self.pusher.unregister_connection(connection_id).await;
        tracing::info!("Connection '{}' disconnected", connection_id);
    }
}
