//! Analysis service wiring the engine to its collaborators.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::ConversationAnalysis;
use crate::domain::ports::{AnalysisRepository, ConversationRepository, QualityScorer};
use crate::services::AnalysisEngine;

/// Loads a transcript, runs the engine, and persists the result.
///
/// The single entry point into the core for the upload path, the explicit
/// trigger-by-id path, and the batch runner.
pub struct AnalysisService<C, A, Q>
where
    C: ConversationRepository,
    A: AnalysisRepository,
    Q: QualityScorer,
{
    conversations: Arc<C>,
    analyses: Arc<A>,
    engine: AnalysisEngine<Q>,
}

impl<C, A, Q> AnalysisService<C, A, Q>
where
    C: ConversationRepository,
    A: AnalysisRepository,
    Q: QualityScorer,
{
    pub fn new(conversations: Arc<C>, analyses: Arc<A>, engine: AnalysisEngine<Q>) -> Self {
        Self {
            conversations,
            analyses,
            engine,
        }
    }

    /// Analyze a conversation and upsert the resulting record.
    ///
    /// Returns `Ok(None)` for an empty transcript (nothing is persisted) and
    /// `ConversationNotFound` for an unknown id. Computation and persistence
    /// failures propagate to the caller, who decides recovery policy.
    pub async fn analyze_conversation(
        &self,
        conversation_id: Uuid,
    ) -> DomainResult<Option<ConversationAnalysis>> {
        self.conversations
            .get(conversation_id)
            .await?
            .ok_or(DomainError::ConversationNotFound(conversation_id))?;

        let messages = self.conversations.get_messages(conversation_id).await?;

        match self.engine.analyze(conversation_id, &messages) {
            Some(analysis) => {
                self.analyses.upsert(&analysis).await?;
                Ok(Some(analysis))
            }
            None => Ok(None),
        }
    }
}
