//! Repository trait for analysis record storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::ConversationAnalysis;

/// Storage for analysis records, keyed one-to-one by conversation.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Insert or replace the analysis for its conversation.
    ///
    /// Upsert semantics: a later run replaces the earlier record for the
    /// same conversation, never appends a second. Concurrent writers for the
    /// same conversation race under last-write-wins.
    async fn upsert(&self, analysis: &ConversationAnalysis) -> DomainResult<()>;

    /// Fetch the stored analysis for a conversation, if any.
    async fn get_by_conversation(
        &self,
        conversation_id: Uuid,
    ) -> DomainResult<Option<ConversationAnalysis>>;
}
