//! HTTP routes for conversation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_session, health, post_message, ConversationHandlers};

/// Creates the conversation router with all endpoints.
pub fn conversation_routes(handlers: ConversationHandlers) -> Router {
    Router::new()
        .route("/api/messages", post(post_message))
        .route("/api/sessions/:user_id", get(get_session))
        .route("/health", get(health))
        .with_state(handlers)
}
