//! HTTP handlers for conversation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::dialogue::{
    GetSessionHandler, GetSessionQuery, HandleTurnCommand, HandleTurnHandler,
};
use crate::domain::dialogue::prompts::ERROR_MARKER;
use crate::domain::foundation::UserId;

use super::dto::{ErrorResponse, HealthResponse, MessageResponse, SendMessageRequest, SessionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ConversationHandlers {
    turn_handler: Arc<HandleTurnHandler>,
    session_handler: Arc<GetSessionHandler>,
}

impl ConversationHandlers {
    pub fn new(turn_handler: Arc<HandleTurnHandler>, session_handler: Arc<GetSessionHandler>) -> Self {
        Self {
            turn_handler,
            session_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/messages - Handle one chat turn
///
/// Always 200 once the body parses; failures come back as an in-band reply.
pub async fn post_message(
    State(handlers): State<ConversationHandlers>,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    if req.content.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("content must not be empty")),
        )
            .into_response();
    }

    let user_id = req
        .user_id
        .and_then(|id| UserId::new(id).ok())
        .unwrap_or_else(UserId::fallback);

    let cmd = HandleTurnCommand {
        user_id,
        message: req.content,
    };

    let reply = match handlers.turn_handler.handle(cmd).await {
        Ok(result) => result.reply,
        Err(e) => {
            tracing::error!("Failed to handle turn: {}", e);
            format!("{} Error: {}", ERROR_MARKER, e)
        }
    };

    (StatusCode::OK, Json(MessageResponse { reply })).into_response()
}

/// GET /api/sessions/:user_id - Current dialogue state
pub async fn get_session(
    State(handlers): State<ConversationHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid user ID")),
            )
                .into_response()
        }
    };

    match handlers.session_handler.handle(GetSessionQuery { user_id }).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => {
            tracing::error!("Failed to load session: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(e.to_string())),
            )
                .into_response()
        }
    }
}

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::healthy()))
}
