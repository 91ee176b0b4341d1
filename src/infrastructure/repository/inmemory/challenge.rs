//! In-memory `ChallengeRepository` implementation.

use async_trait::async_trait;
use rand::Rng;
use tokio::sync::Mutex;

use crate::domain::{Challenge, ChallengeFilter, ChallengeRepository, RepositoryError};

/// In-memory challenge store. Difficulty is stored as a tag, so both
/// filters match against the tag list.
pub struct InMemoryChallengeRepository {
    challenges: Mutex<Vec<Challenge>>,
}

impl InMemoryChallengeRepository {
    pub fn new() -> Self {
        Self {
            challenges: Mutex::new(Vec::new()),
        }
    }

    pub fn with_challenges(challenges: Vec<Challenge>) -> Self {
        Self {
            challenges: Mutex::new(challenges),
        }
    }
}

impl Default for InMemoryChallengeRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_filter(challenge: &Challenge, filter: &ChallengeFilter) -> bool {
    let tag_ok = filter
        .tag
        .as_ref()
        .is_none_or(|tag| challenge.tags.contains(tag));
    let difficulty_ok = filter
        .difficulty
        .as_ref()
        .is_none_or(|difficulty| challenge.tags.contains(difficulty));
    tag_ok && difficulty_ok
}

#[async_trait]
impl ChallengeRepository for InMemoryChallengeRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Challenge>, RepositoryError> {
        let challenges = self.challenges.lock().await;
        Ok(challenges.iter().find(|c| c.id == id).cloned())
    }

    async fn pick_random(
        &self,
        filter: &ChallengeFilter,
    ) -> Result<Option<Challenge>, RepositoryError> {
        let challenges = self.challenges.lock().await;
        let matching: Vec<&Challenge> = challenges
            .iter()
            .filter(|c| matches_filter(c, filter))
            .collect();
        if matching.is_empty() {
            return Ok(None);
        }
        let index = rand::thread_rng().gen_range(0..matching.len());
        Ok(Some(matching[index].clone()))
    }

    async fn insert_challenge(&self, challenge: Challenge) -> Result<Challenge, RepositoryError> {
        let mut challenges = self.challenges.lock().await;
        challenges.push(challenge.clone());
        Ok(challenge)
    }
}
