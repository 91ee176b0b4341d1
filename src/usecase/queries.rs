//! UseCase: read-only queries for the REST surface.

use std::sync::Arc;

use crate::domain::{
    Challenge, ChallengeRepository, RepositoryError, Room, RoomCode, RoomRepository,
};

/// Cap on the room listing, matching the original admin/debug endpoint.
const ROOM_LIST_LIMIT: usize = 50;

pub struct RoomQueryUseCase {
    room_repository: Arc<dyn RoomRepository>,
}

impl RoomQueryUseCase {
    pub fn new(room_repository: Arc<dyn RoomRepository>) -> Self {
        Self { room_repository }
    }

    pub async fn get_by_code(&self, code: &RoomCode) -> Result<Option<Room>, RepositoryError> {
        self.room_repository.find_by_code(code).await
    }

    pub async fn list_recent(&self) -> Result<Vec<Room>, RepositoryError> {
        self.room_repository.list_recent(ROOM_LIST_LIMIT).await
    }
}

pub struct ChallengeQueryUseCase {
    challenge_repository: Arc<dyn ChallengeRepository>,
}

impl ChallengeQueryUseCase {
    pub fn new(challenge_repository: Arc<dyn ChallengeRepository>) -> Self {
        Self {
            challenge_repository,
        }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Challenge>, RepositoryError> {
        self.challenge_repository.find_by_id(id).await
    }
}
