//! Execution Gateway Port - Interface for invoking named AWS tools.
//!
//! Every side effect the agent causes goes through this port. The agent
//! never talks to AWS directly; the gateway forwards `{tool_name, parameters}`
//! to whatever executes the tool and hands back a [`ToolResult`].
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoGateway;
//!
//! #[async_trait]
//! impl ExecutionGateway for EchoGateway {
//!     async fn invoke(&self, request: &ToolRequest) -> Result<ToolResult, GatewayError> {
//!         Ok(ToolResult::success(request.tool_name()))
//!     }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::execution::{ToolRequest, ToolResult};

/// Port for tool execution.
///
/// `Ok` means the tool ran and reported an outcome, which may itself be a
/// failure (`success == false`). `Err` means the tool could not be reached
/// or its answer could not be understood.
#[async_trait]
pub trait ExecutionGateway: Send + Sync {
    async fn invoke(&self, request: &ToolRequest) -> Result<ToolResult, GatewayError>;
}

/// Transport-level gateway failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("no execution gateway is configured")]
    NotConfigured,

    #[error("gateway unavailable: {0}")]
    Unavailable(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("gateway rejected credentials")]
    AuthenticationFailed,

    #[error("gateway returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not parse gateway response: {0}")]
    Parse(String),
}

impl GatewayError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Unavailable(_) | Self::Network(_) | Self::Timeout { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::NotConfigured | Self::AuthenticationFailed | Self::Parse(_) => false,
        }
    }
}
