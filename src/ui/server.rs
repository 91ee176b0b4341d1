//! Server wiring and execution.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handler::http::{
    create_room, get_challenge, get_room, health_check, list_rooms, save_scoreboard,
};
use super::handler::websocket::websocket_handler;
use super::signal::shutdown_signal;
use super::state::AppState;

pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Build the application router. Exposed separately so tests can
    /// serve it on an ephemeral port.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/ws", get(websocket_handler))
            .route("/api/v1/health", get(health_check))
            .route("/api/v1/rooms", get(list_rooms))
            .route("/api/v1/rooms/create", post(create_room))
            .route("/api/v1/rooms/{code}", get(get_room))
            .route("/api/v1/rooms/{code}/scoreboard", post(save_scoreboard))
            .route("/api/v1/challenges/{id}", get(get_challenge))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Bind and serve until a shutdown signal arrives.
    pub async fn run(&self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Room server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
