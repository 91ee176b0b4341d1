//! Real-time challenge-room server.
//!
//! Serves the WebSocket room gateway and the REST fallback API.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 4000
//! cargo run --bin server -- --identity-url https://idp.example.com/verify
//! ```

use std::sync::Arc;

use clap::Parser;
use skillloops::{
    common::{logger::setup_logger, time::SystemClock},
    domain::IdentityVerifier,
    infrastructure::{
        identity::{DevTokenVerifier, HttpIdentityVerifier},
        message_pusher::WebSocketRoomPusher,
        repository::{InMemoryChallengeRepository, InMemoryRoomRepository},
    },
    ui::{AppState, Server},
    usecase::{
        ChallengeQueryUseCase, CreateRoomUseCase, DisconnectParticipantUseCase, JoinRoomUseCase,
        RoomQueryUseCase, ScoreUpdateUseCase,
    },
};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Real-time challenge-room server with scoreboard broadcast", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "4000")]
    port: u16,

    /// Token introspection endpoint of the identity provider. Without
    /// it, only dev tokens (`dev.<id>.<name>`) are accepted.
    #[arg(long)]
    identity_url: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repositories
    // 2. Identity verifier
    // 3. RoomPusher
    // 4. UseCases
    // 5. AppState + Server

    // 1. Create repositories (in-memory document store stand-in)
    let room_repository = Arc::new(InMemoryRoomRepository::new());
    let challenge_repository = Arc::new(InMemoryChallengeRepository::new());

    // 2. Create the identity verifier
    let verifier: Arc<dyn IdentityVerifier> = match args.identity_url {
        Some(url) => {
            tracing::info!("Verifying credentials against {}", url);
            Arc::new(HttpIdentityVerifier::new(url))
        }
        None => {
            tracing::warn!("No --identity-url given, accepting dev tokens only");
            Arc::new(DevTokenVerifier)
        }
    };

    // 3. Create the RoomPusher (WebSocket implementation)
    let pusher = Arc::new(WebSocketRoomPusher::new());

    // 4. Create UseCases
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(
        room_repository.clone(),
        pusher.clone(),
    ));
    let score_update_usecase = Arc::new(ScoreUpdateUseCase::new(
        room_repository.clone(),
        pusher.clone(),
    ));
    let disconnect_usecase = Arc::new(DisconnectParticipantUseCase::new(pusher.clone()));
    let create_room_usecase = Arc::new(CreateRoomUseCase::new(
        room_repository.clone(),
        challenge_repository.clone(),
        Arc::new(SystemClock),
    ));
    let room_query_usecase = Arc::new(RoomQueryUseCase::new(room_repository.clone()));
    let challenge_query_usecase = Arc::new(ChallengeQueryUseCase::new(challenge_repository.clone()));

    // 5. Create and run the server
    let state = Arc::new(AppState {
        join_room_usecase,
        score_update_usecase,
        disconnect_usecase,
        create_room_usecase,
        room_query_usecase,
        challenge_query_usecase,
        verifier,
        pusher,
    });
    let server = Server::new(state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
