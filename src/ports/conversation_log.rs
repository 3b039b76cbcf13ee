//! Conversation Log Port - Append-only record of what the agent did.
//!
//! Appends are best effort. Callers log a warning on failure and carry on;
//! a broken log never fails a turn.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LogEntryId, Timestamp, UserId};

/// One recorded line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogEntryId,
    pub user_id: UserId,
    pub text: String,
    pub recorded_at: Timestamp,
}

impl LogEntry {
    pub fn new(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            id: LogEntryId::new(),
            user_id,
            text: text.into(),
            recorded_at: Timestamp::now(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversationLogError {
    #[error("Failed to serialize log entry: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Log unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ConversationLog: Send + Sync {
    /// Record `text` against `user_id`.
    async fn append(&self, user_id: &UserId, text: &str) -> Result<(), ConversationLogError>;
}
