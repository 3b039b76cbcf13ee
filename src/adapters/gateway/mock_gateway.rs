//! Mock Execution Gateway for testing.
//!
//! # Features
//!
//! - Pre-configured results consumed in order
//! - Error injection for failure-path testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockExecutionGateway::new()
//!     .with_result(ToolResult::success("Instance launched").with_field("instance_id", "i-1"))
//!     .with_error(MockError::Network { message: "reset".into() });
//!
//! let first = gateway.invoke(&request).await?;
//! assert_eq!(gateway.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::execution::{ToolRequest, ToolResult};
use crate::ports::{ExecutionGateway, GatewayError};

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Result(ToolResult),
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    Unavailable { message: String },
    Network { message: String },
    Timeout { timeout_secs: u64 },
    AuthenticationFailed,
}

impl From<MockError> for GatewayError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::Unavailable { message } => GatewayError::unavailable(message),
            MockError::Network { message } => GatewayError::network(message),
            MockError::Timeout { timeout_secs } => GatewayError::Timeout { timeout_secs },
            MockError::AuthenticationFailed => GatewayError::AuthenticationFailed,
        }
    }
}

/// Mock gateway for tests.
///
/// With an empty queue every call succeeds with a generic message. Every
/// request is kept for inspection, so it is not meant for long-running use.
#[derive(Debug, Clone, Default)]
pub struct MockExecutionGateway {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<ToolRequest>>>,
}

impl MockExecutionGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a result to the queue.
    pub fn with_result(self, result: ToolResult) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Result(result));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Returns the number of calls made to this gateway.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<ToolRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the most recent call.
    pub fn last_call(&self) -> Option<ToolRequest> {
        self.calls.lock().unwrap().last().cloned()
    }

    fn next_response(&self, request: &ToolRequest) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                MockResponse::Result(ToolResult::success(format!(
                    "Mock {} completed",
                    request.tool_name()
                )))
            })
    }
}

#[async_trait]
impl ExecutionGateway for MockExecutionGateway {
    async fn invoke(&self, request: &ToolRequest) -> Result<ToolResult, GatewayError> {
        self.calls.lock().unwrap().push(request.clone());

        match self.next_response(request) {
            MockResponse::Result(result) => Ok(result),
            MockResponse::Error(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_queued_results_in_order() {
        let gateway = MockExecutionGateway::new()
            .with_result(ToolResult::success("first"))
            .with_error(MockError::AuthenticationFailed);

        let request = ToolRequest::query("x", None);
        let first = gateway.invoke(&request).await.unwrap();
        let second = gateway.invoke(&request).await.unwrap_err();

        assert_eq!(first.message.as_deref(), Some("first"));
        assert_eq!(second, GatewayError::AuthenticationFailed);
    }

    #[tokio::test]
    async fn empty_queue_succeeds_generically() {
        let gateway = MockExecutionGateway::new();
        let result = gateway.invoke(&ToolRequest::query("x", None)).await.unwrap();
        assert!(result.success);
        assert_eq!(
            result.message.as_deref(),
            Some("Mock comprehensive_aws_query completed")
        );
    }

    #[tokio::test]
    async fn records_calls() {
        let gateway = MockExecutionGateway::new();
        gateway.invoke(&ToolRequest::query("a", None)).await.unwrap();
        gateway.invoke(&ToolRequest::query("b", None)).await.unwrap();

        assert_eq!(gateway.call_count(), 2);
        assert_eq!(gateway.last_call(), Some(ToolRequest::query("b", None)));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let gateway = MockExecutionGateway::new();
        let clone = gateway.clone();
        clone.invoke(&ToolRequest::query("a", None)).await.unwrap();
        assert_eq!(gateway.call_count(), 1);
    }
}
