//! Value objects for the room domain.

use std::fmt;

use rand::Rng;
use uuid::Uuid;

use super::error::DomainError;

const ROOM_CODE_MAX_LEN: usize = 16;
const GENERATED_CODE_LEN: usize = 6;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Short human-shareable room identifier, the primary lookup key for joins.
///
/// Codes are stored verbatim: lookups are case-sensitive, matching the
/// behavior of the original platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomCode(String);

impl RoomCode {
    /// Validate and wrap a room code.
    ///
    /// A code must be non-empty, at most 16 characters, and consist of
    /// ASCII alphanumerics or `-`.
    pub fn new(code: String) -> Result<Self, DomainError> {
        if code.is_empty()
            || code.len() > ROOM_CODE_MAX_LEN
            || !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(DomainError::InvalidRoomCode(code));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RoomCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Factory for freshly generated room codes.
pub struct RoomCodeFactory;

impl RoomCodeFactory {
    /// Generate a 6-character uppercase alphanumeric room code.
    pub fn generate() -> RoomCode {
        let mut rng = rand::thread_rng();
        let code: String = (0..GENERATED_CODE_LEN)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        RoomCode(code)
    }
}

/// Identifier of one live real-time session.
///
/// Connections are transient routing state, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unix timestamp in UTC milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
