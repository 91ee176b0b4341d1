//! UseCase layer: one type per operation of the room core.

mod create_room;
mod disconnect;
mod error;
mod join_room;
mod queries;
mod score_update;

pub use create_room::{CreateRoomCommand, CreateRoomUseCase};
pub use disconnect::DisconnectParticipantUseCase;
pub use error::{CreateRoomError, JoinRoomError};
pub use join_room::JoinRoomUseCase;
pub use queries::{ChallengeQueryUseCase, RoomQueryUseCase};
pub use score_update::ScoreUpdateUseCase;
