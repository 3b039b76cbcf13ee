//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ExecutionGateway` - Invokes named AWS tools
//! - `SessionStore` - Persists per-user dialogue state
//! - `ConversationLog` - Append-only record of executed actions

mod conversation_log;
mod execution_gateway;
mod session_store;

pub use conversation_log::{ConversationLog, ConversationLogError, LogEntry};
pub use execution_gateway::{ExecutionGateway, GatewayError};
pub use session_store::{SessionStore, SessionStoreError};
