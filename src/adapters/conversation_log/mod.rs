//! Conversation Log Adapters
//!
//! - **FileConversationLog** - Append-only JSON lines on disk
//! - **InMemoryConversationLog** - Process-local list (testing/development)

mod file_conversation_log;
mod in_memory_conversation_log;

pub use file_conversation_log::FileConversationLog;
pub use in_memory_conversation_log::InMemoryConversationLog;
