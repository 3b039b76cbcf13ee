//! File-based Session Store Adapter
//!
//! Stores one YAML file per user under a base directory so sessions survive
//! restarts and can be inspected by hand.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::dialogue::Session;
use crate::domain::foundation::UserId;
use crate::ports::{SessionStore, SessionStoreError};

/// Longest user ID used verbatim in a file name.
const MAX_PLAIN_ID_LEN: usize = 64;

/// File-based storage for sessions
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
}

impl FileSessionStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSessionStore::new("./data/sessions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the session file for `user_id`.
    ///
    /// Short IDs made only of ASCII letters, digits, `-` and `_` are used
    /// as-is. Anything else is replaced by its SHA-256 digest, which keeps the
    /// name inside the base directory and under file system length limits.
    fn session_file_path(&self, user_id: &UserId) -> PathBuf {
        let raw = user_id.as_str();
        let plain = raw.len() <= MAX_PLAIN_ID_LEN
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        let stem = if plain {
            format!("u_{}", raw)
        } else {
            let mut hasher = Sha256::new();
            hasher.update(raw.as_bytes());
            format!("h_{:x}", hasher.finalize())
        };
        self.base_path.join(format!("{}.yaml", stem))
    }

    async fn ensure_dir(&self) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<Session>, SessionStoreError> {
        let file_path = self.session_file_path(user_id);

        if !file_path.exists() {
            return Ok(None);
        }

        let yaml = fs::read_to_string(&file_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        let session = serde_yaml::from_str(&yaml)
            .map_err(|e| SessionStoreError::DeserializationFailed(e.to_string()))?;

        Ok(Some(session))
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        self.ensure_dir().await?;

        let yaml = serde_yaml::to_string(session)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        // Write then rename so a crash never leaves a half-written file.
        let file_path = self.session_file_path(session.user_id());
        let tmp_path = file_path.with_extension("yaml.tmp");
        fs::write(&tmp_path, yaml)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
        fs::rename(&tmp_path, &file_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), SessionStoreError> {
        let file_path = self.session_file_path(user_id);

        if file_path.exists() {
            fs::remove_file(&file_path)
                .await
                .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
        }

        Ok(())
    }
}
