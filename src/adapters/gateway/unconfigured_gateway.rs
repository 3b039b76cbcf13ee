//! Gateway used when no execution endpoint is configured.
//!
//! Every call fails with [`GatewayError::NotConfigured`], so management and
//! creation requests are reported as failures instead of pretending to run.

use async_trait::async_trait;

use crate::domain::execution::{ToolRequest, ToolResult};
use crate::ports::{ExecutionGateway, GatewayError};

#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredExecutionGateway;

#[async_trait]
impl ExecutionGateway for UnconfiguredExecutionGateway {
    async fn invoke(&self, request: &ToolRequest) -> Result<ToolResult, GatewayError> {
        tracing::warn!(tool = %request.tool_name(), "Refusing tool call: no gateway endpoint");
        Err(GatewayError::NotConfigured)
    }
}
