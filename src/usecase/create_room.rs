//! UseCase: room creation (REST flow).
//!
//! Resolves the linked challenge (provided id, random pick, or a
//! placeholder as last resort), allocates an unused room code, and
//! stores the room with the creator as its only participant and an
//! empty scoreboard.

use std::sync::Arc;

use uuid::Uuid;

use crate::common::time::Clock;
use crate::domain::{
    Challenge, ChallengeFilter, ChallengeRepository, Participant, Room, RoomCode, RoomCodeFactory,
    RoomRepository, Subject, Timestamp,
};

use super::error::CreateRoomError;

const MAX_CODE_ATTEMPTS: usize = 5;

/// Parameters of a room creation request.
#[derive(Debug, Default)]
pub struct CreateRoomCommand {
    pub mode: Option<String>,
    pub challenge_id: Option<String>,
    pub filter: ChallengeFilter,
}

pub struct CreateRoomUseCase {
    room_repository: Arc<dyn RoomRepository>,
    challenge_repository: Arc<dyn ChallengeRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateRoomUseCase {
    pub fn new(
        room_repository: Arc<dyn RoomRepository>,
        challenge_repository: Arc<dyn ChallengeRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            room_repository,
            challenge_repository,
            clock,
        }
    }

    pub async fn execute(
        &self,
        creator: &Subject,
        command: CreateRoomCommand,
    ) -> Result<Room, CreateRoomError> {
        let challenge = self
            .resolve_challenge(command.challenge_id, &command.filter)
            .await?;
        let code = self.allocate_code().await?;

        let mut room = Room::new(
            code,
            command.mode.unwrap_or_else(|| "1v1".to_string()),
            creator.id.clone(),
            Timestamp::new(self.clock.now_utc_millis()),
        );
        room.challenge_id = Some(challenge.id.clone());
        room.add_participant(Participant::new(
            creator.id.clone(),
            creator.display_name.clone(),
        ));

        let room = self.room_repository.insert_room(room).await?;
        tracing::info!(
            "Room '{}' created by '{}' with challenge '{}'",
            room.code,
            creator.id,
            challenge.id
        );
        Ok(room)
    }

    /// A provided challenge id must exist; otherwise pick a random
    /// challenge matching the filters, creating a placeholder when the
    /// filtered set is empty.
    async fn resolve_challenge(
        &self,
        challenge_id: Option<String>,
        filter: &ChallengeFilter,
    ) -> Result<Challenge, CreateRoomError> {
        match challenge_id {
            Some(id) => self
                .challenge_repository
                .find_by_id(&id)
                .await?
                .ok_or(CreateRoomError::ChallengeNotFound(id)),
            None => match self.challenge_repository.pick_random(filter).await? {
                Some(challenge) => Ok(challenge),
                None => {
                    let placeholder = Challenge::placeholder(Uuid::new_v4().to_string());
                    Ok(self
                        .challenge_repository
                        .insert_challenge(placeholder)
                        .await?)
                }
            },
        }
    }

    async fn allocate_code(&self) -> Result<RoomCode, CreateRoomError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let candidate = RoomCodeFactory::generate();
            if self
                .room_repository
                .find_by_code(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }
        }
        Err(CreateRoomError::CodeAllocationFailed)
    }
}
