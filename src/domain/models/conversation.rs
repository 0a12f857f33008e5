//! Conversation and message domain models.
//!
//! A conversation is an ordered transcript of messages exchanged between a
//! user and an AI assistant. Message order (the `seq` field) is significant:
//! the analysis heuristics inspect "the last message" and per-sender
//! subsequences, so transcripts must always be handed around sorted by `seq`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The human participant
    User,
    /// The AI assistant
    Ai,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Ai => "ai",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Self::User),
            "ai" => Some(Self::Ai),
            _ => None,
        }
    }
}

/// A single message within a conversation transcript.
///
/// Immutable once created. `seq` is the chronological position within the
/// conversation and is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Row identifier
    pub id: i64,
    /// Conversation this message belongs to
    pub conversation_id: Uuid,
    /// Message author
    pub sender: Sender,
    /// Message body
    pub text: String,
    /// Chronological position within the conversation (0-based)
    pub seq: i64,
    /// When this message was stored
    pub created_at: DateTime<Utc>,
}

/// A message that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub sender: Sender,
    pub text: String,
}

impl NewMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }
}

/// A conversation owning an ordered sequence of messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier
    pub id: Uuid,
    /// Optional human-readable title
    pub title: Option<String>,
    /// When this conversation was created
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new conversation with the given title.
    pub fn new(title: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_roundtrip() {
        assert_eq!(Sender::from_str("user"), Some(Sender::User));
        assert_eq!(Sender::from_str("AI"), Some(Sender::Ai));
        assert_eq!(Sender::from_str("system"), None);
        assert_eq!(Sender::User.as_str(), "user");
        assert_eq!(Sender::Ai.as_str(), "ai");
    }

    #[test]
    fn test_conversation_creation() {
        let conversation = Conversation::new(Some("Support chat".to_string()));
        assert_eq!(conversation.title.as_deref(), Some("Support chat"));

        let untitled = Conversation::new(None);
        assert!(untitled.title.is_none());
        assert_ne!(conversation.id, untitled.id);
    }
}
