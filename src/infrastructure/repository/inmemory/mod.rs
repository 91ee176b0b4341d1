//! In-memory repository implementations.
//!
//! These stand in for the document store the production platform uses.
//! The domain traits are the seam: swapping in a real document database
//! means adding another implementation here, not touching the core.

pub mod challenge;
pub mod room;

pub use challenge::InMemoryChallengeRepository;
pub use room::InMemoryRoomRepository;
