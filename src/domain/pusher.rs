//! Message push interface for live connections.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::error::MessagePushError;
use super::value_object::{ConnectionId, RoomCode};

/// Channel used to hand outbound frames to a connection's writer task.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Owns the connection senders and the room-code → connection-set
/// membership map (the broadcast groups).
///
/// This is the only component that reads or writes that map. Broadcast is
/// fire-and-forget from the caller's perspective: it never waits on
/// storage or on slow receivers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomPusher: Send + Sync {
    /// Register a freshly gated connection and its outbound channel.
    async fn register_connection(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// Drop a connection's sender and remove it from every broadcast
    /// group it joined (the implicit leave on disconnect).
    async fn unregister_connection(&self, connection_id: &ConnectionId);

    /// Add a connection to a room's broadcast group.
    async fn join_room(&self, connection_id: &ConnectionId, code: &RoomCode);

    /// Remove a connection from one room's broadcast group.
    async fn leave_room(&self, connection_id: &ConnectionId, code: &RoomCode);

    /// Push a frame to a single connection.
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError>;

    /// Push a frame to every connection currently in the room's group.
    /// Partial send failures are tolerated and logged.
    async fn broadcast_room(&self, code: &RoomCode, content: &str) -> Result<(), MessagePushError>;
}
