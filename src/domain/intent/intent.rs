//! Intent variants and the vocabulary they carry.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ResourceTarget;
use crate::domain::resource::ResourceType;

/// Classification of a single user utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Build a new resource.
    CreateResource {
        resource_type: ResourceType,
        original_message: String,
    },

    /// Start, stop, restart, delete or scale an existing resource.
    ManageResource {
        action: ManagementAction,
        target: ResourceTarget,
        original_message: String,
    },

    CostOptimization { original_message: String },

    SecurityAction { original_message: String },

    /// Follow-up work after a resource was created.
    NextStepAction {
        action_type: NextStepKind,
        original_message: String,
    },

    /// Fallback: hand the message to the generic query tool verbatim.
    QueryResources { original_message: String },
}

/// Discriminant of [`Intent`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    CreateResource,
    ManageResource,
    CostOptimization,
    SecurityAction,
    NextStepAction,
    QueryResources,
}

impl IntentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::CreateResource => "create_resource",
            IntentKind::ManageResource => "manage_resource",
            IntentKind::CostOptimization => "cost_optimization",
            IntentKind::SecurityAction => "security_action",
            IntentKind::NextStepAction => "next_step_action",
            IntentKind::QueryResources => "query_resources",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::CreateResource { .. } => IntentKind::CreateResource,
            Intent::ManageResource { .. } => IntentKind::ManageResource,
            Intent::CostOptimization { .. } => IntentKind::CostOptimization,
            Intent::SecurityAction { .. } => IntentKind::SecurityAction,
            Intent::NextStepAction { .. } => IntentKind::NextStepAction,
            Intent::QueryResources { .. } => IntentKind::QueryResources,
        }
    }

    /// The utterance this intent was classified from, unmodified.
    pub fn original_message(&self) -> &str {
        match self {
            Intent::CreateResource { original_message, .. }
            | Intent::ManageResource { original_message, .. }
            | Intent::CostOptimization { original_message }
            | Intent::SecurityAction { original_message }
            | Intent::NextStepAction { original_message, .. }
            | Intent::QueryResources { original_message } => original_message,
        }
    }
}

/// Management verbs. The verb doubles as the gateway tool name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagementAction {
    Restart,
    Start,
    Stop,
    Delete,
    Scale,
}

impl ManagementAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManagementAction::Restart => "restart",
            ManagementAction::Start => "start",
            ManagementAction::Stop => "stop",
            ManagementAction::Delete => "delete",
            ManagementAction::Scale => "scale",
        }
    }

    /// True for actions whose effect cannot be undone by the agent.
    pub fn is_irreversible(&self) -> bool {
        matches!(self, ManagementAction::Stop | ManagementAction::Delete)
    }
}

impl fmt::Display for ManagementAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Follow-up categories offered after a resource is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStepKind {
    Install,
    Connect,
    Test,
    Monitor,
    Secure,
    Scale,
    Database,
    Trigger,
}

impl NextStepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NextStepKind::Install => "install",
            NextStepKind::Connect => "connect",
            NextStepKind::Test => "test",
            NextStepKind::Monitor => "monitor",
            NextStepKind::Secure => "secure",
            NextStepKind::Scale => "scale",
            NextStepKind::Database => "database",
            NextStepKind::Trigger => "trigger",
        }
    }
}

impl fmt::Display for NextStepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whole-message answer to a pending confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationToken {
    Confirm,
    Cancel,
}

impl ConfirmationToken {
    /// Parses `confirm`/`yes`/`y` or `cancel`/`no`/`n`, trimmed and
    /// case-insensitive. Any other text is not a token.
    pub fn from_token(message: &str) -> Option<Self> {
        match message.trim().to_lowercase().as_str() {
            "confirm" | "yes" | "y" => Some(ConfirmationToken::Confirm),
            "cancel" | "no" | "n" => Some(ConfirmationToken::Cancel),
            _ => None,
        }
    }
}
