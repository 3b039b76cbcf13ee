//! HTTP adapters - REST API implementations.

pub mod conversation;

pub use conversation::{conversation_routes, ConversationHandlers};
