//! Batch analysis over conversations missing a stored record.

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::errors::DomainResult;
use crate::domain::ports::{AnalysisRepository, ConversationRepository, QualityScorer};
use crate::services::AnalysisService;

/// Outcome of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct BatchReport {
    /// Conversations analyzed and persisted
    pub analyzed: u64,
    /// Conversations skipped because their transcript was empty
    pub skipped_empty: u64,
    /// Conversations whose analysis or persistence failed
    pub failed: u64,
}

/// Iterates conversations lacking an analysis and processes each in turn.
///
/// Strictly sequential, no parallel fan-out. A per-item failure is logged
/// against the conversation id and does not abort the batch; partial success
/// is an expected outcome and completed work is never rolled back.
pub struct BatchRunner<C, A, Q>
where
    C: ConversationRepository,
    A: AnalysisRepository,
    Q: QualityScorer,
{
    conversations: Arc<C>,
    service: AnalysisService<C, A, Q>,
}

impl<C, A, Q> BatchRunner<C, A, Q>
where
    C: ConversationRepository,
    A: AnalysisRepository,
    Q: QualityScorer,
{
    pub fn new(conversations: Arc<C>, service: AnalysisService<C, A, Q>) -> Self {
        Self {
            conversations,
            service,
        }
    }

    /// Run the batch. Only the set-difference query itself can fail the run.
    pub async fn run(&self) -> DomainResult<BatchReport> {
        let pending = self.conversations.list_unanalyzed().await?;
        info!(pending = pending.len(), "starting batch analysis");

        let mut report = BatchReport::default();
        for conversation_id in pending {
            match self.service.analyze_conversation(conversation_id).await {
                Ok(Some(_)) => report.analyzed += 1,
                Ok(None) => report.skipped_empty += 1,
                Err(err) => {
                    error!(%conversation_id, error = %err, "failed to analyze conversation");
                    report.failed += 1;
                }
            }
        }

        info!(
            analyzed = report.analyzed,
            skipped_empty = report.skipped_empty,
            failed = report.failed,
            "batch analysis finished"
        );
        Ok(report)
    }
}
