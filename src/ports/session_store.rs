//! Session Store Port - Interface for persisting per-user sessions.
//!
//! A store never creates sessions on its own; `load` returns `None` for an
//! unknown user and the caller decides whether to start a fresh one.

use async_trait::async_trait;

use crate::domain::dialogue::Session;
use crate::domain::foundation::UserId;

/// Errors that can occur during session storage operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for loading and saving sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the session for `user_id`, if one has been saved.
    async fn load(&self, user_id: &UserId) -> Result<Option<Session>, SessionStoreError>;

    /// Save `session`, replacing any earlier copy for the same user.
    async fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Remove the stored session. Removing an unknown user is not an error.
    async fn delete(&self, user_id: &UserId) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message() {
        let err = SessionStoreError::IoError("disk full".to_string());
        assert_eq!(err.to_string(), "IO error: disk full");
    }

    #[test]
    fn deserialization_error_message() {
        let err = SessionStoreError::DeserializationFailed("bad yaml".to_string());
        assert!(err.to_string().contains("deserialize"));
    }
}
