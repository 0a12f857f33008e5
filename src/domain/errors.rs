//! Domain errors for the Convoscope analysis system.

use thiserror::Error;
use uuid::Uuid;

/// Domain-level errors that can occur in the analysis system.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Conversation not found: {0}")]
    ConversationNotFound(Uuid),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
