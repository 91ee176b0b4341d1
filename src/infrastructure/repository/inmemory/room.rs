//! In-memory `RoomRepository` implementation.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Participant, RepositoryError, Room, RoomCode, RoomRepository, ScoreEntry};

/// In-memory room store. Rooms are kept in insertion order; `list_recent`
/// walks the list from the newest end.
pub struct InMemoryRoomRepository {
    rooms: Mutex<Vec<Room>>,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(Vec::new()),
        }
    }

    /// Seed the store with existing rooms (test fixtures, dev data).
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        Self {
            rooms: Mutex::new(rooms),
        }
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_by_code(&self, code: &RoomCode) -> Result<Option<Room>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.iter().find(|r| &r.code == code).cloned())
    }

    async fn insert_room(&self, room: Room) -> Result<Room, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        if rooms.iter().any(|r| r.code == room.code) {
            return Err(RepositoryError::DuplicateRoom(
                room.code.as_str().to_string(),
            ));
        }
        rooms.push(room.clone());
        Ok(room)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Room>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.iter().rev().take(limit).cloned().collect())
    }

    async fn append_participant(
        &self,
        code: &RoomCode,
        participant: Participant,
    ) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .iter_mut()
            .find(|r| &r.code == code)
            .ok_or_else(|| RepositoryError::RoomNotFound(code.as_str().to_string()))?;
        room.add_participant(participant);
        Ok(())
    }

    async fn save_scoreboard(
        &self,
        code: &RoomCode,
        scoreboard: Vec<ScoreEntry>,
    ) -> Result<Option<Room>, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        match rooms.iter_mut().find(|r| &r.code == code) {
            Some(room) => {
                room.set_scoreboard(scoreboard);
                Ok(Some(room.clone()))
            }
            None => Ok(None),
        }
    }
}
