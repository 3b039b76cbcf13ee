//! HTTP adapter for conversation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, HealthResponse, MessageResponse, PendingConfirmationResponse,
    PendingCreationResponse, SendMessageRequest, SessionResponse,
};
pub use handlers::ConversationHandlers;
pub use routes::conversation_routes;
