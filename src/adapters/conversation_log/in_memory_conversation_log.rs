//! In-Memory Conversation Log Adapter

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::ports::{ConversationLog, ConversationLogError, LogEntry};

/// Keeps log entries in memory, in append order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationLog {
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl InMemoryConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entries(&self) -> Vec<LogEntry> {
        self.entries.read().await.clone()
    }

    pub async fn entries_for(&self, user_id: &UserId) -> Vec<LogEntry> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| &e.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ConversationLog for InMemoryConversationLog {
    async fn append(&self, user_id: &UserId, text: &str) -> Result<(), ConversationLogError> {
        self.entries
            .write()
            .await
            .push(LogEntry::new(user_id.clone(), text));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn entries_keep_append_order_per_user() {
        let log = InMemoryConversationLog::new();
        let alice = UserId::new("alice").unwrap();
        let bob = UserId::new("bob").unwrap();

        log.append(&alice, "created ec2").await.unwrap();
        log.append(&bob, "query").await.unwrap();
        log.append(&alice, "stop i-1").await.unwrap();

        let texts: Vec<_> = log.entries_for(&alice).await.into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["created ec2", "stop i-1"]);
        assert_eq!(log.entries().await.len(), 3);
    }
}
