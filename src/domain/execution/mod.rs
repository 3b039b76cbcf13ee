//! Execution domain - what the agent asks the gateway to do and what comes back.

mod request;
mod result;

pub use request::{QueryFocus, ToolRequest, QUERY_TOOL};
pub use result::ToolResult;
