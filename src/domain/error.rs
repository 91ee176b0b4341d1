//! Error types shared across the domain interfaces.

use thiserror::Error;

/// Validation errors raised by value object constructors.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("invalid room code: '{0}'")]
    InvalidRoomCode(String),
}

/// Errors surfaced by the durable store collaborators.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),

    #[error("room '{0}' already exists")]
    DuplicateRoom(String),

    #[error("challenge '{0}' not found")]
    ChallengeNotFound(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// Errors produced by the identity verifier.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no credential supplied")]
    MissingCredential,

    #[error("credential rejected: {0}")]
    InvalidCredential(String),

    #[error("identity verifier unavailable: {0}")]
    VerifierUnavailable(String),
}

/// Errors produced when pushing messages to live connections.
#[derive(Debug, Error)]
pub enum MessagePushError {
    #[error("connection '{0}' not found")]
    ConnectionNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}
