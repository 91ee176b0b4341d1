//! Shared application state.

use std::sync::Arc;

use crate::domain::{IdentityVerifier, RoomPusher};
use crate::usecase::{
    ChallengeQueryUseCase, CreateRoomUseCase, DisconnectParticipantUseCase, JoinRoomUseCase,
    RoomQueryUseCase, ScoreUpdateUseCase,
};

/// State handed to every handler. Holds the use cases, the identity
/// verifier used by the connection gate and the REST bearer check, and
/// the pusher the WebSocket handler registers connections with.
pub struct AppState {
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    pub score_update_usecase: Arc<ScoreUpdateUseCase>,
    pub disconnect_usecase: Arc<DisconnectParticipantUseCase>,
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    pub room_query_usecase: Arc<RoomQueryUseCase>,
    pub challenge_query_usecase: Arc<ChallengeQueryUseCase>,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub pusher: Arc<dyn RoomPusher>,
}
