//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `gateway` - Execution gateway over HTTP, plus a scripted mock
//! - `storage` - Session stores (in-memory, YAML files)
//! - `conversation_log` - Conversation logs (in-memory, JSON lines)
//! - `http` - Inbound REST API

pub mod conversation_log;
pub mod gateway;
pub mod http;
pub mod storage;

pub use conversation_log::{FileConversationLog, InMemoryConversationLog};
pub use gateway::{
    HttpExecutionGateway, HttpGatewayConfig, MockExecutionGateway, UnconfiguredExecutionGateway,
};
pub use storage::{FileSessionStore, InMemorySessionStore};
