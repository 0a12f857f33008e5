//! SQLite implementation of the ConversationRepository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::adapters::sqlite::{parse_datetime, parse_uuid};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Conversation, Message, NewMessage, Sender};
use crate::domain::ports::ConversationRepository;

#[derive(Clone)]
pub struct SqliteConversationRepository {
    pool: SqlitePool,
}

impl SqliteConversationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationRepository for SqliteConversationRepository {
    async fn create(&self, conversation: &Conversation) -> DomainResult<()> {
        sqlx::query("INSERT INTO conversations (id, title, created_at) VALUES (?, ?, ?)")
            .bind(conversation.id.to_string())
            .bind(&conversation.title)
            .bind(conversation.created_at.to_rfc3339())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> DomainResult<Option<Conversation>> {
        let row: Option<ConversationRow> =
            sqlx::query_as("SELECT id, title, created_at FROM conversations WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(|r| r.try_into()).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Conversation>> {
        let rows: Vec<ConversationRow> = sqlx::query_as(
            "SELECT id, title, created_at FROM conversations ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    async fn add_messages(
        &self,
        conversation_id: Uuid,
        messages: &[NewMessage],
    ) -> DomainResult<()> {
        let mut tx = self.pool.begin().await?;

        // Continue from the current maximum so earlier messages keep their
        // positions across repeated calls.
        let (next_seq,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(MAX(seq), -1) + 1 FROM messages WHERE conversation_id = ?",
        )
        .bind(conversation_id.to_string())
        .fetch_one(&mut *tx)
        .await?;

        let now = Utc::now().to_rfc3339();
        for (offset, message) in messages.iter().enumerate() {
            sqlx::query(
                "INSERT INTO messages (conversation_id, sender, text, seq, created_at)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(conversation_id.to_string())
            .bind(message.sender.as_str())
            .bind(&message.text)
            .bind(next_seq + offset as i64)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_messages(&self, conversation_id: Uuid) -> DomainResult<Vec<Message>> {
        let rows: Vec<MessageRow> = sqlx::query_as(
            "SELECT id, conversation_id, sender, text, seq, created_at
             FROM messages WHERE conversation_id = ? ORDER BY seq",
        )
        .bind(conversation_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    async fn list_unanalyzed(&self) -> DomainResult<Vec<Uuid>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT c.id FROM conversations c
             LEFT JOIN conversation_analyses a ON a.conversation_id = c.id
             WHERE a.id IS NULL
             ORDER BY c.created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|(id,)| parse_uuid(&id)).collect()
    }
}

#[derive(sqlx::FromRow)]
struct ConversationRow {
    id: String,
    title: Option<String>,
    created_at: String,
}

impl TryFrom<ConversationRow> for Conversation {
    type Error = DomainError;

    fn try_from(row: ConversationRow) -> Result<Self, Self::Error> {
        Ok(Conversation {
            id: parse_uuid(&row.id)?,
            title: row.title,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    conversation_id: String,
    sender: String,
    text: String,
    seq: i64,
    created_at: String,
}

impl TryFrom<MessageRow> for Message {
    type Error = DomainError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let sender = Sender::from_str(&row.sender).ok_or_else(|| {
            DomainError::SerializationError(format!("Invalid sender: {}", row.sender))
        })?;

        Ok(Message {
            id: row.id,
            conversation_id: parse_uuid(&row.conversation_id)?,
            sender,
            text: row.text,
            seq: row.seq,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}
