//! ResourceType enum covering every AWS resource the agent can build.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// AWS resources recognised by the creation dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Ec2,
    Lambda,
    Rds,
    S3,
    Vpc,
    Alb,
}

/// Grouping that decides how a create tool is named on the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceFamily {
    Compute,
    Serverless,
    Database,
    Storage,
    Network,
}

impl ResourceFamily {
    /// Suffix appended to `create_<resource>` for this family.
    pub fn tool_suffix(&self) -> Option<&'static str> {
        match self {
            ResourceFamily::Compute => Some("instance"),
            ResourceFamily::Serverless => Some("function"),
            ResourceFamily::Database => Some("database"),
            ResourceFamily::Storage => Some("bucket"),
            ResourceFamily::Network => None,
        }
    }
}

impl ResourceType {
    /// Returns all resource types in classifier priority order.
    pub fn all() -> &'static [ResourceType] {
        &[
            ResourceType::Ec2,
            ResourceType::Lambda,
            ResourceType::Rds,
            ResourceType::S3,
            ResourceType::Vpc,
            ResourceType::Alb,
        ]
    }

    /// Lowercase identifier used in tool names and parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Ec2 => "ec2",
            ResourceType::Lambda => "lambda",
            ResourceType::Rds => "rds",
            ResourceType::S3 => "s3",
            ResourceType::Vpc => "vpc",
            ResourceType::Alb => "alb",
        }
    }

    /// Uppercase label used in headings.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    pub fn family(&self) -> ResourceFamily {
        match self {
            ResourceType::Ec2 => ResourceFamily::Compute,
            ResourceType::Lambda => ResourceFamily::Serverless,
            ResourceType::Rds => ResourceFamily::Database,
            ResourceType::S3 => ResourceFamily::Storage,
            ResourceType::Vpc | ResourceType::Alb => ResourceFamily::Network,
        }
    }

    /// Name of the gateway tool that creates this resource.
    pub fn create_tool_name(&self) -> String {
        match self.family().tool_suffix() {
            Some(suffix) => format!("create_{}_{}", self.as_str(), suffix),
            None => format!("create_{}", self.as_str()),
        }
    }

    /// Words that identify this resource when mentioned in free text.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ResourceType::Ec2 => &["ec2", "instance", "server"],
            ResourceType::Lambda => &["lambda", "function"],
            ResourceType::Rds => &["rds", "database"],
            ResourceType::S3 => &["s3", "bucket"],
            ResourceType::Vpc => &["vpc", "network"],
            ResourceType::Alb => &["alb", "load balancer"],
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ResourceType::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == lower)
            .ok_or_else(|| {
                ValidationError::invalid_format("resource_type", format!("unknown resource '{}'", s))
            })
    }
}
