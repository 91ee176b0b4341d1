//! UseCase: joining a challenge room.
//!
//! Implements the `Unjoined → Joining → Joined` transition: look the
//! room up by code, append the participant if absent, and only then
//! register the connection into the room's broadcast group. On any
//! failure the connection stays unjoined and no room state is touched.

use std::sync::Arc;

use crate::domain::{ConnectionId, Participant, Room, RoomCode, RoomPusher, RoomRepository, Subject};

use super::error::JoinRoomError;

pub struct JoinRoomUseCase {
    room_repository: Arc<dyn RoomRepository>,
    pusher: Arc<dyn RoomPusher>,
}

impl JoinRoomUseCase {
    pub fn new(room_repository: Arc<dyn RoomRepository>, pusher: Arc<dyn RoomPusher>) -> Self {
        Self {
            room_repository,
            pusher,
        }
    }

    /// Execute a join request.
    ///
    /// `requested_name` is the display name from the join payload; it
    /// falls back to the authenticated subject's display name. The
    /// subject id always comes from the session, never the payload.
    ///
    /// Returns the room as of the join, with the new participant already
    /// included, so the caller can emit the current scoreboard to the
    /// joiner and the presence event to the room.
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        subject: &Subject,
        code: &RoomCode,
        requested_name: Option<String>,
    ) -> Result<(Room, Participant), JoinRoomError> {
        let display_name = requested_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| subject.display_name.clone());

        let mut room = self
            .room_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| JoinRoomError::RoomNotFound(code.as_str().to_string()))?;

        // Dedupe by subject id OR display name; the list is append-only.
        let participant = Participant::new(subject.id.clone(), display_name);
        if room.add_participant(participant.clone()) {
            self.room_repository
                .append_participant(code, participant.clone())
                .await?;
        }

        // Membership is granted only after the participant record is
        // durable; failures above leave the connection unjoined.
        self.pusher.join_room(connection_id, code).await;
        tracing::info!(
            "Subject '{}' joined room '{}' as '{}'",
            subject.id,
            code,
            participant.display_name
        );

        Ok((room, participant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        MockRoomPusher, MockRoomRepository, RepositoryError, ScoreEntry, Timestamp,
    };

    fn code(raw: &str) -> RoomCode {
        RoomCode::new(raw.to_string()).unwrap()
    }

    fn subject(id: &str, name: &str) -> Subject {
        Subject::new(id.to_string(), None, Some(name.to_string()))
    }

    fn seeded_room() -> Room {
        let mut room = Room::new(
            code("AB12"),
            "1v1".to_string(),
            "creator".to_string(),
            Timestamp::new(1000),
        );
        room.set_scoreboard(vec![ScoreEntry::new("alice".to_string(), 0.0)]);
        room
    }

    #[tokio::test]
    async fn test_join_unknown_room_grants_no_membership() {
        // given: no room matches, and the broadcast group must stay
        // untouched
        let mut repository = MockRoomRepository::new();
        repository
            .expect_find_by_code()
            .returning(|_| Ok(None));
        repository.expect_append_participant().never();
        let mut pusher = MockRoomPusher::new();
        pusher.expect_join_room().never();

        let usecase = JoinRoomUseCase::new(Arc::new(repository), Arc::new(pusher));

        // when:
        let result = usecase
            .execute(
                &ConnectionId::generate(),
                &subject("u1", "alice"),
                &code("ZZ99"),
                None,
            )
            .await;

        // then:
        assert!(matches!(result, Err(JoinRoomError::RoomNotFound(_))));
    }

    #[tokio::test]
    async fn test_join_appends_new_participant_and_joins_group() {
        // given:
        let mut repository = MockRoomRepository::new();
        repository
            .expect_find_by_code()
            .returning(|_| Ok(Some(seeded_room())));
        repository
            .expect_append_participant()
            .withf(|_, p| p.subject_id == "u2" && p.display_name == "bob")
            .times(1)
            .returning(|_, _| Ok(()));
        let mut pusher = MockRoomPusher::new();
        pusher.expect_join_room().times(1).return_const(());

        let usecase = JoinRoomUseCase::new(Arc::new(repository), Arc::new(pusher));

        // when:
        let (room, participant) = usecase
            .execute(
                &ConnectionId::generate(),
                &subject("u2", "bob"),
                &code("AB12"),
                None,
            )
            .await
            .unwrap();

        // then: the returned room already carries the new participant,
        // and the existing scoreboard is untouched
        assert!(room.has_participant("u2", "bob"));
        assert_eq!(participant.display_name, "bob");
        assert_eq!(room.scoreboard, vec![ScoreEntry::new("alice".to_string(), 0.0)]);
    }

    #[tokio::test]
    async fn test_rejoining_subject_is_not_duplicated() {
        // given: the subject is already a participant
        let mut repository = MockRoomRepository::new();
        repository.expect_find_by_code().returning(|_| {
            let mut room = seeded_room();
            room.add_participant(Participant::new("u1".to_string(), "alice".to_string()));
            Ok(Some(room))
        });
        repository.expect_append_participant().never();
        let mut pusher = MockRoomPusher::new();
        pusher.expect_join_room().times(1).return_const(());

        let usecase = JoinRoomUseCase::new(Arc::new(repository), Arc::new(pusher));

        // when:
        let (room, _) = usecase
            .execute(
                &ConnectionId::generate(),
                &subject("u1", "alice"),
                &code("AB12"),
                None,
            )
            .await
            .unwrap();

        // then: still exactly one participant entry
        assert_eq!(room.participants.len(), 1);
    }

    #[tokio::test]
    async fn test_requested_name_overrides_subject_display_name() {
        // given:
        let mut repository = MockRoomRepository::new();
        repository
            .expect_find_by_code()
            .returning(|_| Ok(Some(seeded_room())));
        repository
            .expect_append_participant()
            .withf(|_, p| p.display_name == "speedrunner")
            .times(1)
            .returning(|_, _| Ok(()));
        let mut pusher = MockRoomPusher::new();
        pusher.expect_join_room().times(1).return_const(());

        let usecase = JoinRoomUseCase::new(Arc::new(repository), Arc::new(pusher));

        // when:
        let (_, participant) = usecase
            .execute(
                &ConnectionId::generate(),
                &subject("u2", "bob"),
                &code("AB12"),
                Some("speedrunner".to_string()),
            )
            .await
            .unwrap();

        // then:
        assert_eq!(participant.display_name, "speedrunner");
        // the subject id still comes from the session
        assert_eq!(participant.subject_id, "u2");
    }

    #[tokio::test]
    async fn test_storage_failure_leaves_connection_unjoined() {
        // given:
        let mut repository = MockRoomRepository::new();
        repository.expect_find_by_code().returning(|_| {
            Err(RepositoryError::StorageUnavailable("down".to_string()))
        });
        let mut pusher = MockRoomPusher::new();
        pusher.expect_join_room().never();

        let usecase = JoinRoomUseCase::new(Arc::new(repository), Arc::new(pusher));

        // when:
        let result = usecase
            .execute(
                &ConnectionId::generate(),
                &subject("u1", "alice"),
                &code("AB12"),
                None,
            )
            .await;

        // then:
        assert!(matches!(result, Err(JoinRoomError::Storage(_))));
    }
}
