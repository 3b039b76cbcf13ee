//! GetSessionHandler - Read-only view of a user's dialogue state.

use std::sync::Arc;

use crate::domain::dialogue::Session;
use crate::domain::foundation::UserId;
use crate::ports::{SessionStore, SessionStoreError};

/// Query for a user's session
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub user_id: UserId,
}

/// Handler for session lookups
pub struct GetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the stored session, or an empty one for an unknown user.
    /// Never writes.
    pub async fn handle(&self, query: GetSessionQuery) -> Result<Session, SessionStoreError> {
        Ok(self
            .store
            .load(&query.user_id)
            .await?
            .unwrap_or_else(|| Session::new(query.user_id)))
    }
}
