//! Dialogue errors and their in-band rendering.
//!
//! The conversational channel has no separate error path, so every variant
//! knows how to render itself as a reply carrying the failure marker.

use std::fmt;
use thiserror::Error;

use super::prompts::ERROR_MARKER;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::resource::ResourceType;

/// Which pending record a token expected to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    Confirmation,
    Creation,
}

impl fmt::Display for PendingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingKind::Confirmation => write!(f, "confirmation"),
            PendingKind::Creation => write!(f, "resource creation"),
        }
    }
}

/// Errors raised while handling a turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogueError {
    /// Kept as a category only; the classifier always falls back to a query.
    #[error("message could not be classified")]
    ClassificationAmbiguous,

    #[error("no pending {0}")]
    NoPendingState(PendingKind),

    #[error("{action} failed: {message}")]
    ExecutionFailure { action: String, message: String },

    #[error("{0} creation is not supported")]
    UnsupportedResourceType(ResourceType),

    #[error("invalid dialogue transition: {0}")]
    InvalidTransition(String),
}

impl DialogueError {
    pub fn execution_failure(action: impl Into<String>, message: impl Into<String>) -> Self {
        DialogueError::ExecutionFailure {
            action: action.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DialogueError::ClassificationAmbiguous => ErrorCode::ValidationFailed,
            DialogueError::NoPendingState(_) => ErrorCode::NoPendingState,
            DialogueError::ExecutionFailure { .. } => ErrorCode::ExecutionFailed,
            DialogueError::UnsupportedResourceType(_) => ErrorCode::UnsupportedResourceType,
            DialogueError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
        }
    }

    /// User-visible reply for this error. Never empty.
    pub fn to_reply(&self) -> String {
        match self {
            DialogueError::ClassificationAmbiguous => format!(
                "{} I couldn't work out what you meant. Could you rephrase?",
                ERROR_MARKER
            ),
            DialogueError::NoPendingState(PendingKind::Confirmation) => {
                format!("{} No pending actions to confirm.", ERROR_MARKER)
            }
            DialogueError::NoPendingState(PendingKind::Creation) => {
                format!("{} No pending resource creation found.", ERROR_MARKER)
            }
            DialogueError::ExecutionFailure { action, message } => {
                format!("{} Failed to {}: {}", ERROR_MARKER, action, message)
            }
            DialogueError::UnsupportedResourceType(resource_type) => format!(
                "{} {} creation isn't supported yet. I can create EC2, LAMBDA, RDS and S3 resources.",
                ERROR_MARKER,
                resource_type.label()
            ),
            DialogueError::InvalidTransition(message) => {
                format!("{} Error: {}", ERROR_MARKER, message)
            }
        }
    }
}

impl From<ValidationError> for DialogueError {
    fn from(err: ValidationError) -> Self {
        DialogueError::InvalidTransition(err.to_string())
    }
}
