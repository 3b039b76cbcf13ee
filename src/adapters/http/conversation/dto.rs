//! HTTP DTOs for conversation endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::dialogue::{DialogueStage, Session};
use crate::domain::intent::ManagementAction;
use crate::domain::resource::{CreationMode, ResourceType};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Inbound chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
    /// Defaults to the shared `default` user when absent or blank.
    #[serde(default)]
    pub user_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Agent reply to a chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingCreationResponse {
    pub resource_type: ResourceType,
    pub original_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingConfirmationResponse {
    pub action: ManagementAction,
    pub target: String,
    pub original_message: String,
}

/// Current dialogue state for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user_id: String,
    pub stage: DialogueStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_creation: Option<PendingCreationResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<CreationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wizard_step: Option<u32>,
    pub collected_config: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_confirmation: Option<PendingConfirmationResponse>,
    pub updated_at: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id().to_string(),
            stage: session.stage(),
            pending_creation: session.pending_creation().map(|p| PendingCreationResponse {
                resource_type: p.resource_type,
                original_message: p.original_message.clone(),
            }),
            mode: session.mode(),
            resource_type: session.resource_type(),
            wizard_step: session.wizard_step(),
            collected_config: session.collected_config().clone(),
            pending_confirmation: session.pending_confirmation().map(|p| {
                PendingConfirmationResponse {
                    action: p.action,
                    target: p.target.to_string(),
                    original_message: p.original_message.clone(),
                }
            }),
            updated_at: session.updated_at().to_rfc3339(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
