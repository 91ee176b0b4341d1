//! Domain entities for rooms, challenges, and identities.

use super::value_object::{RoomCode, Timestamp};

/// A verified identity attached to a connection by the connection gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: String,
    pub email: Option<String>,
    pub display_name: String,
}

impl Subject {
    /// Build a subject, defaulting the display name to the email address
    /// and then to the subject id when no explicit name is known.
    pub fn new(id: String, email: Option<String>, display_name: Option<String>) -> Self {
        let display_name = display_name
            .or_else(|| email.clone())
            .unwrap_or_else(|| id.clone());
        Self {
            id,
            email,
            display_name,
        }
    }
}

/// One entry in a room's participant list.
///
/// The list is append-only: leaving a room never retracts an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub subject_id: String,
    pub display_name: String,
}

impl Participant {
    pub fn new(subject_id: String, display_name: String) -> Self {
        Self {
            subject_id,
            display_name,
        }
    }
}

/// One entry of the canonical scoreboard.
///
/// Entries are keyed by display name, not subject id; two subjects sharing
/// a display name collide (known limitation, kept for fidelity).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: f64,
}

impl ScoreEntry {
    pub fn new(name: String, score: f64) -> Self {
        Self { name, score }
    }
}

/// A durable room record grouping participants and a scoreboard around
/// one challenge.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub code: RoomCode,
    pub mode: String,
    pub participants: Vec<Participant>,
    pub scoreboard: Vec<ScoreEntry>,
    pub challenge_id: Option<String>,
    pub created_by: String,
    pub created_at: Timestamp,
    /// Advisory expiry, never enforced by the real-time core.
    pub expires_at: Option<Timestamp>,
}

impl Room {
    pub fn new(code: RoomCode, mode: String, created_by: String, created_at: Timestamp) -> Self {
        Self {
            code,
            mode,
            participants: Vec::new(),
            scoreboard: Vec::new(),
            challenge_id: None,
            created_by,
            created_at,
            expires_at: None,
        }
    }

    /// A participant counts as present when either the subject id or the
    /// display name already appears in the list.
    pub fn has_participant(&self, subject_id: &str, display_name: &str) -> bool {
        self.participants
            .iter()
            .any(|p| p.subject_id == subject_id || p.display_name == display_name)
    }

    /// Append a participant unless an id-or-name match is already present.
    ///
    /// Returns `true` when the list was actually extended.
    pub fn add_participant(&mut self, participant: Participant) -> bool {
        if self.has_participant(&participant.subject_id, &participant.display_name) {
            return false;
        }
        self.participants.push(participant);
        true
    }

    /// Replace the entire scoreboard with the given canonical list.
    ///
    /// Updates replace rather than merge; a stale client view overwrites
    /// other participants' scores.
    pub fn set_scoreboard(&mut self, scoreboard: Vec<ScoreEntry>) {
        self.scoreboard = scoreboard;
    }
}

/// The kind of question a challenge poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    Mcq,
    Coding,
    ShortAnswer,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::Coding => "coding",
            QuestionType::ShortAnswer => "short-answer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mcq" => Some(QuestionType::Mcq),
            "coding" => Some(QuestionType::Coding),
            "short-answer" => Some(QuestionType::ShortAnswer),
            _ => None,
        }
    }
}

/// A quiz/coding challenge linked to a room. Read-only for the
/// real-time core.
#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub answer_index: Option<u32>,
    pub starter_code: String,
    pub tests: Vec<String>,
    pub time_limit: u32,
    pub tags: Vec<String>,
}

impl Challenge {
    /// Starter challenge attached to a room when no real challenge matches
    /// the requested filters.
    pub fn placeholder(id: String) -> Self {
        Self {
            id,
            title: "Welcome Challenge — Short MCQ".to_string(),
            description: "This is a sample starter challenge automatically attached to the room."
                .to_string(),
            question_type: QuestionType::Mcq,
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            answer_index: Some(0),
            starter_code: String::new(),
            tests: Vec::new(),
            time_limit: 30,
            tags: vec!["placeholder".to_string()],
        }
    }
}
