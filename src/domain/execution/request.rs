//! Tool request value object.
//!
//! Every side effect the agent causes is expressed as a `ToolRequest` and
//! handed to the execution gateway as `{tool_name, parameters}`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::dialogue::PendingConfirmation;
use crate::domain::resource::{CreationMode, ResourceType};

/// Tool that answers free-form, cost and security questions.
pub const QUERY_TOOL: &str = "comprehensive_aws_query";

/// Narrows a query to one concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryFocus {
    Cost,
    Security,
}

impl QueryFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryFocus::Cost => "cost",
            QueryFocus::Security => "security",
        }
    }
}

/// A single gateway invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    Create {
        resource_type: ResourceType,
        mode: CreationMode,
        config: BTreeMap<String, String>,
    },
    Manage(PendingConfirmation),
    Query {
        query: String,
        focus: Option<QueryFocus>,
    },
}

impl ToolRequest {
    pub fn query(query: impl Into<String>, focus: Option<QueryFocus>) -> Self {
        ToolRequest::Query {
            query: query.into(),
            focus,
        }
    }

    pub fn tool_name(&self) -> String {
        match self {
            ToolRequest::Create { resource_type, .. } => resource_type.create_tool_name(),
            ToolRequest::Manage(confirmation) => confirmation.action.as_str().to_string(),
            ToolRequest::Query { .. } => QUERY_TOOL.to_string(),
        }
    }

    /// JSON parameters sent alongside the tool name.
    pub fn parameters(&self) -> Map<String, Value> {
        let mut params = Map::new();
        match self {
            ToolRequest::Create {
                resource_type,
                mode,
                config,
            } => {
                for (key, value) in config {
                    params.insert(key.clone(), Value::String(value.clone()));
                }
                params.insert("resource_type".into(), resource_type.as_str().into());
                params.insert("mode".into(), mode.as_str().into());
            }
            ToolRequest::Manage(confirmation) => {
                params.insert("action".into(), confirmation.action.as_str().into());
                if let Some(id) = &confirmation.target.resource_id {
                    params.insert("resource_id".into(), id.clone().into());
                }
                if let Some(kind) = confirmation.target.resource_type {
                    params.insert("resource_type".into(), kind.as_str().into());
                }
                params.insert(
                    "original_message".into(),
                    confirmation.original_message.clone().into(),
                );
            }
            ToolRequest::Query { query, focus } => {
                params.insert("query".into(), query.clone().into());
                params.insert("format".into(), "detailed".into());
                params.insert("include_costs".into(), Value::Bool(true));
                if let Some(focus) = focus {
                    params.insert("focus".into(), focus.as_str().into());
                }
            }
        }
        params
    }

    /// Short phrase naming the request, used in failure replies.
    pub fn describe(&self) -> String {
        match self {
            ToolRequest::Create { resource_type, .. } => format!("create {}", resource_type),
            ToolRequest::Manage(confirmation) => {
                format!("{} {}", confirmation.action, confirmation.target)
            }
            ToolRequest::Query { .. } => "run query".to_string(),
        }
    }
}

impl fmt::Display for ToolRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tool_name())
    }
}
