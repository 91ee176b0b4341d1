//! UseCase error types.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Failures of the join state machine. Both variants leave the requester
/// unjoined and are reported to that connection only.
#[derive(Debug, Error)]
pub enum JoinRoomError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

#[derive(Debug, Error)]
pub enum CreateRoomError {
    #[error("challenge '{0}' not found")]
    ChallengeNotFound(String),

    #[error("could not allocate an unused room code")]
    CodeAllocationFailed,

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}
