//! SQLite implementation of the AnalysisRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::adapters::sqlite::{parse_datetime, parse_uuid};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ConversationAnalysis, Sentiment};
use crate::domain::ports::AnalysisRepository;

#[derive(Clone)]
pub struct SqliteAnalysisRepository {
    pool: SqlitePool,
}

impl SqliteAnalysisRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisRepository for SqliteAnalysisRepository {
    async fn upsert(&self, analysis: &ConversationAnalysis) -> DomainResult<()> {
        sqlx::query(
            r#"INSERT INTO conversation_analyses (
                   id, conversation_id, sentiment, response_time_avg, resolution,
                   escalation_need, fallback_frequency, clarity_score, relevance_score,
                   accuracy_score, completeness_score, empathy_score, overall_score, created_at
               )
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(conversation_id) DO UPDATE SET
                   id = excluded.id,
                   sentiment = excluded.sentiment,
                   response_time_avg = excluded.response_time_avg,
                   resolution = excluded.resolution,
                   escalation_need = excluded.escalation_need,
                   fallback_frequency = excluded.fallback_frequency,
                   clarity_score = excluded.clarity_score,
                   relevance_score = excluded.relevance_score,
                   accuracy_score = excluded.accuracy_score,
                   completeness_score = excluded.completeness_score,
                   empathy_score = excluded.empathy_score,
                   overall_score = excluded.overall_score,
                   created_at = excluded.created_at"#,
        )
        .bind(analysis.id.to_string())
        .bind(analysis.conversation_id.to_string())
        .bind(analysis.sentiment.as_str())
        .bind(analysis.response_time_avg)
        .bind(analysis.resolution)
        .bind(analysis.escalation_need)
        .bind(i64::from(analysis.fallback_frequency))
        .bind(analysis.clarity_score)
        .bind(analysis.relevance_score)
        .bind(analysis.accuracy_score)
        .bind(analysis.completeness_score)
        .bind(analysis.empathy_score)
        .bind(analysis.overall_score)
        .bind(analysis.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_conversation(
        &self,
        conversation_id: Uuid,
    ) -> DomainResult<Option<ConversationAnalysis>> {
        let row: Option<AnalysisRow> = sqlx::query_as(
            "SELECT id, conversation_id, sentiment, response_time_avg, resolution,
                    escalation_need, fallback_frequency, clarity_score, relevance_score,
                    accuracy_score, completeness_score, empathy_score, overall_score, created_at
             FROM conversation_analyses WHERE conversation_id = ?",
        )
        .bind(conversation_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.try_into()).transpose()
    }
}

#[derive(sqlx::FromRow)]
struct AnalysisRow {
    id: String,
    conversation_id: String,
    sentiment: String,
    response_time_avg: f64,
    resolution: bool,
    escalation_need: bool,
    fallback_frequency: i64,
    clarity_score: Option<f64>,
    relevance_score: Option<f64>,
    accuracy_score: Option<f64>,
    completeness_score: Option<f64>,
    empathy_score: Option<f64>,
    overall_score: f64,
    created_at: String,
}

impl TryFrom<AnalysisRow> for ConversationAnalysis {
    type Error = DomainError;

    fn try_from(row: AnalysisRow) -> Result<Self, Self::Error> {
        let sentiment = Sentiment::from_str(&row.sentiment).ok_or_else(|| {
            DomainError::SerializationError(format!("Invalid sentiment: {}", row.sentiment))
        })?;

        Ok(ConversationAnalysis {
            id: parse_uuid(&row.id)?,
            conversation_id: parse_uuid(&row.conversation_id)?,
            sentiment,
            response_time_avg: row.response_time_avg,
            resolution: row.resolution,
            escalation_need: row.escalation_need,
            fallback_frequency: row.fallback_frequency as u32,
            clarity_score: row.clarity_score,
            relevance_score: row.relevance_score,
            accuracy_score: row.accuracy_score,
            completeness_score: row.completeness_score,
            empathy_score: row.empathy_score,
            overall_score: row.overall_score,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}
