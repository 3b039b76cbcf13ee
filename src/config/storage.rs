//! Session store and conversation log configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where dialogue state and the conversation log live
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding one session file per user (file backend)
    #[serde(default = "default_sessions_dir")]
    pub sessions_dir: PathBuf,

    /// JSON lines file receiving conversation entries (file backend)
    #[serde(default = "default_conversation_log_path")]
    pub conversation_log_path: PathBuf,
}

/// Storage backend type
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

impl StorageConfig {
    pub fn is_file_backed(&self) -> bool {
        self.backend == StorageBackend::File
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            sessions_dir: default_sessions_dir(),
            conversation_log_path: default_conversation_log_path(),
        }
    }
}

fn default_sessions_dir() -> PathBuf {
    PathBuf::from("./data/sessions")
}

fn default_conversation_log_path() -> PathBuf {
    PathBuf::from("./data/conversation.jsonl")
}
