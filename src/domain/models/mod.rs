//! Domain models.

pub mod analysis;
pub mod conversation;

pub use analysis::{ConversationAnalysis, QualityScores, Sentiment};
pub use conversation::{Conversation, Message, NewMessage, Sender};
