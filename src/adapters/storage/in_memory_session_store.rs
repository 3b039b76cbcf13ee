//! In-Memory Session Store Adapter
//!
//! Keeps sessions in a process-local map. Used for development and tests,
//! and as the default backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dialogue::Session;
use crate::domain::foundation::UserId;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<UserId, Session>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.sessions.read().await.get(user_id).cloned())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.user_id().clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(user_id);
        Ok(())
    }
}
