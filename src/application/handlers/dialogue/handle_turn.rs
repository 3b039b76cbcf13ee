//! HandleTurnHandler - Load a user's session, run one turn, save it back.
//!
//! Turns for the same user are serialized; different users run concurrently.
//!
//! A confirmed action is committed before it runs: the session without its
//! pending confirmation is stored first, so a failed save can never leave a
//! confirmation behind that would run the same action twice.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::DialogueController;
use crate::domain::dialogue::Session;
use crate::domain::foundation::UserId;
use crate::domain::intent::ConfirmationToken;
use crate::ports::{ConversationLog, ExecutionGateway, SessionStore, SessionStoreError};

/// Command to handle one inbound message
#[derive(Debug, Clone)]
pub struct HandleTurnCommand {
    pub user_id: UserId,
    pub message: String,
}

/// Result of handling a turn
#[derive(Debug, Clone)]
pub struct HandleTurnResult {
    pub reply: String,
    pub session: Session,
}

/// Error type for handling a turn
#[derive(Debug, Clone)]
pub enum HandleTurnError {
    /// Session could not be loaded or saved
    Storage(String),
}

impl std::fmt::Display for HandleTurnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandleTurnError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for HandleTurnError {}

impl From<SessionStoreError> for HandleTurnError {
    fn from(err: SessionStoreError) -> Self {
        HandleTurnError::Storage(err.to_string())
    }
}

/// Handler for inbound conversational messages
pub struct HandleTurnHandler {
    store: Arc<dyn SessionStore>,
    controller: DialogueController,
    user_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl HandleTurnHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        gateway: Arc<dyn ExecutionGateway>,
        log: Arc<dyn ConversationLog>,
    ) -> Self {
        Self {
            store,
            controller: DialogueController::new(gateway, log),
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleTurnCommand,
    ) -> Result<HandleTurnResult, HandleTurnError> {
        let lock = self.user_lock(&cmd.user_id).await;
        let _turn = lock.lock().await;

        // 1. Load the session, starting a fresh one on first contact
        let mut session = self
            .store
            .load(&cmd.user_id)
            .await?
            .unwrap_or_else(|| Session::new(cmd.user_id.clone()));

        // 2. Commit a confirmed action before the gateway sees it
        if ConfirmationToken::from_token(&cmd.message) == Some(ConfirmationToken::Confirm) {
            let mut committed = session.clone();
            if committed.take_confirmation().is_ok() {
                self.persist(&committed).await?;
            }
        }

        // 3. Run the turn
        let reply = self.controller.handle_turn(&mut session, &cmd.message).await;

        // 4. Persist
        self.persist(&session).await?;

        Ok(HandleTurnResult { reply, session })
    }

    /// Saves `session`, or drops it from the store once nothing is pending.
    async fn persist(&self, session: &Session) -> Result<(), SessionStoreError> {
        if session.is_empty() {
            self.store.delete(session.user_id()).await
        } else {
            self.store.save(session).await
        }
    }

    /// Returns the lock for `user_id`, dropping locks nobody holds.
    async fn user_lock(&self, user_id: &UserId) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks.retain(|id, lock| id == user_id || Arc::strong_count(lock) > 1);
        locks
            .entry(user_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
