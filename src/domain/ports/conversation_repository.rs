//! Repository trait for conversation and message storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Conversation, Message, NewMessage};

/// Read/write access to conversations and their ordered transcripts.
///
/// The store is the source of message ordering: `get_messages` must return
/// messages sorted by their chronological `seq` key, and `add_messages`
/// assigns monotonically increasing positions.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Persist a new conversation.
    async fn create(&self, conversation: &Conversation) -> DomainResult<()>;

    /// Fetch a conversation by id.
    async fn get(&self, id: Uuid) -> DomainResult<Option<Conversation>>;

    /// List conversations, newest first.
    async fn list(&self) -> DomainResult<Vec<Conversation>>;

    /// Append messages to a conversation, preserving the given order.
    ///
    /// Sequence positions continue from the conversation's current maximum,
    /// so repeated calls never reorder earlier messages.
    async fn add_messages(
        &self,
        conversation_id: Uuid,
        messages: &[NewMessage],
    ) -> DomainResult<()>;

    /// Fetch the full transcript of a conversation, ordered by `seq`.
    async fn get_messages(&self, conversation_id: Uuid) -> DomainResult<Vec<Message>>;

    /// Ids of conversations that have no stored analysis yet.
    ///
    /// This is the set-difference query the batch runner iterates.
    async fn list_unanalyzed(&self) -> DomainResult<Vec<Uuid>>;
}
