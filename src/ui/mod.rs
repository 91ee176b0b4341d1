//! UI layer: HTTP/WebSocket surface of the server.

pub mod handler;
mod server;
mod signal;
mod state;

pub use server::Server;
pub use state::AppState;
