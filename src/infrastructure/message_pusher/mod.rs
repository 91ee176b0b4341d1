//! Message push implementations.
//!
//! Concrete implementations of the `RoomPusher` trait. Currently only
//! WebSocket; the trait keeps the door open for a shared broadcast bus
//! when the server is scaled beyond one process.

pub mod websocket;

pub use websocket::WebSocketRoomPusher;
