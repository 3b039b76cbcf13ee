//! File-based Conversation Log Adapter
//!
//! Appends one JSON object per line. Writes are serialized so concurrent
//! turns never interleave partial lines.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::ports::{ConversationLog, ConversationLogError, LogEntry};

/// Append-only JSON-lines log on disk.
#[derive(Debug)]
pub struct FileConversationLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileConversationLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConversationLog for FileConversationLog {
    async fn append(&self, user_id: &UserId, text: &str) -> Result<(), ConversationLogError> {
        let entry = LogEntry::new(user_id.clone(), text);
        let mut line = serde_json::to_vec(&entry)
            .map_err(|e| ConversationLogError::SerializationFailed(e.to_string()))?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConversationLogError::IoError(e.to_string()))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| ConversationLogError::IoError(e.to_string()))?;
        file.write_all(&line)
            .await
            .map_err(|e| ConversationLogError::IoError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| ConversationLogError::IoError(e.to_string()))?;

        Ok(())
    }
}
