//! Repository traits for the durable store collaborators.
//!
//! The real-time core treats storage as an external document store and
//! only depends on these interfaces; the infrastructure layer provides
//! the concrete implementations (dependency inversion).

use async_trait::async_trait;

use super::entity::{Challenge, Participant, Room, ScoreEntry};
use super::error::RepositoryError;
use super::value_object::RoomCode;

/// Durable room records: find-by-code, creation, participant append, and
/// scoreboard upsert.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Look up a room by its shareable code.
    async fn find_by_code(&self, code: &RoomCode) -> Result<Option<Room>, RepositoryError>;

    /// Store a freshly created room and return the stored record.
    async fn insert_room(&self, room: Room) -> Result<Room, RepositoryError>;

    /// Most recently created rooms, newest first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Room>, RepositoryError>;

    /// Append a participant to a room's participant list.
    async fn append_participant(
        &self,
        code: &RoomCode,
        participant: Participant,
    ) -> Result<(), RepositoryError>;

    /// Replace a room's persisted scoreboard with the given canonical
    /// list. Returns the updated room, or `None` when no room matches.
    async fn save_scoreboard(
        &self,
        code: &RoomCode,
        scoreboard: Vec<ScoreEntry>,
    ) -> Result<Option<Room>, RepositoryError>;
}

/// Optional filters when picking a random challenge for a new room.
#[derive(Debug, Clone, Default)]
pub struct ChallengeFilter {
    pub tag: Option<String>,
    /// Difficulty is stored as a tag on the challenge record.
    pub difficulty: Option<String>,
}

/// Durable challenge records. Read-only from the room core's perspective,
/// except for the placeholder created when no challenge matches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChallengeRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Challenge>, RepositoryError>;

    /// Pick a random challenge matching the filter, or `None` when the
    /// filtered set is empty.
    async fn pick_random(
        &self,
        filter: &ChallengeFilter,
    ) -> Result<Option<Challenge>, RepositoryError>;

    async fn insert_challenge(&self, challenge: Challenge) -> Result<Challenge, RepositoryError>;
}
