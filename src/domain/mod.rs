//! Domain layer: entities, value objects, and the interfaces the
//! real-time core depends on.
//!
//! Nothing in this module performs I/O. Concrete implementations of the
//! traits live in the infrastructure layer (dependency inversion).

mod entity;
mod error;
mod identity;
mod pusher;
mod repository;
mod scoreboard;
mod value_object;

pub use entity::{Challenge, Participant, QuestionType, Room, ScoreEntry, Subject};
pub use error::{AuthError, DomainError, MessagePushError, RepositoryError};
pub use identity::IdentityVerifier;
pub use pusher::{PusherChannel, RoomPusher};
pub use repository::{ChallengeFilter, ChallengeRepository, RoomRepository};
pub use scoreboard::{ScoreboardPayload, normalize_scoreboard};
pub use value_object::{ConnectionId, RoomCode, RoomCodeFactory, Timestamp};

#[cfg(test)]
pub use identity::MockIdentityVerifier;
#[cfg(test)]
pub use pusher::MockRoomPusher;
#[cfg(test)]
pub use repository::{MockChallengeRepository, MockRoomRepository};
