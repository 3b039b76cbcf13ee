//! Execution Gateway Adapters
//!
//! - **HttpExecutionGateway** - Posts tool calls to a remote handler
//! - **MockExecutionGateway** - Scripted results for tests
//! - **UnconfiguredExecutionGateway** - Refuses every call when no endpoint is set

mod http_gateway;
mod mock_gateway;
mod unconfigured_gateway;

pub use http_gateway::{parse_tool_result, HttpExecutionGateway, HttpGatewayConfig};
pub use mock_gateway::{MockError, MockExecutionGateway, MockResponse};
pub use unconfigured_gateway::UnconfiguredExecutionGateway;
