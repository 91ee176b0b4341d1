//! Real-time challenge-room server for the skillloops learning platform.
//!
//! This library provides the room/scoreboard synchronization core: an
//! authenticated WebSocket gateway, room membership tracking, scoreboard
//! normalization, and broadcast-then-persist update semantics, plus the
//! REST fallback surface for rooms and challenges.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// shared library
pub mod common;
