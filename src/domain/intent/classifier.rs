//! Ordered keyword classifier.
//!
//! Categories are evaluated in a fixed priority order and the first category
//! with any matching substring wins:
//!
//! 1. resource creation ([`CREATE_PATTERNS`])
//! 2. resource management ([`MANAGE_PATTERNS`])
//! 3. cost optimization ([`COST_KEYWORDS`])
//! 4. security ([`SECURITY_KEYWORDS`])
//! 5. next-step actions ([`NEXT_STEP_PATTERNS`])
//! 6. fallback query
//!
//! Patterns overlap on purpose ("create database" is both a creation and a
//! next-step phrase), so the order above is part of the contract. Within a
//! table, rows are tested top to bottom and the first matching row wins.

use super::{Intent, ManagementAction, NextStepKind, ResourceTarget};
use crate::domain::resource::ResourceType;

/// Creation trigger phrases per resource type.
pub const CREATE_PATTERNS: &[(ResourceType, &[&str])] = &[
    (
        ResourceType::Ec2,
        &["create ec2", "launch instance", "new instance", "create instance"],
    ),
    (
        ResourceType::Lambda,
        &["create lambda", "new function", "create function"],
    ),
    (
        ResourceType::Rds,
        &["create database", "create rds", "new database"],
    ),
    (ResourceType::S3, &["create bucket", "new bucket", "create s3"]),
    (ResourceType::Vpc, &["create vpc", "new vpc"]),
    (
        ResourceType::Alb,
        &["create load balancer", "create alb", "new load balancer"],
    ),
];

/// Management verbs, checked in order. `Restart` sits above `Start`
/// because "restart" contains "start": with `Start` first, "restart web-1"
/// would classify as a start and the "restart" keyword could never match.
pub const MANAGE_PATTERNS: &[(ManagementAction, &[&str])] = &[
    (ManagementAction::Restart, &["restart", "reboot"]),
    (ManagementAction::Start, &["start", "turn on", "power on"]),
    (
        ManagementAction::Stop,
        &["stop", "turn off", "power off", "shut down"],
    ),
    (ManagementAction::Delete, &["delete", "remove", "terminate"]),
    (
        ManagementAction::Scale,
        &["scale up", "scale down", "increase capacity", "decrease capacity"],
    ),
];

pub const COST_KEYWORDS: &[&str] = &["cost", "expensive", "unused", "optimize", "save money"];

pub const SECURITY_KEYWORDS: &[&str] = &["security", "public", "access", "permissions", "vulnerable"];

pub const NEXT_STEP_PATTERNS: &[(NextStepKind, &[&str])] = &[
    (NextStepKind::Install, &["install", "set up", "configure"]),
    (NextStepKind::Connect, &["connect", "ssh", "access", "login"]),
    (NextStepKind::Test, &["test", "try", "run", "execute"]),
    (NextStepKind::Monitor, &["monitor", "alert", "watch", "track"]),
    (NextStepKind::Secure, &["secure", "ssl", "certificate", "https"]),
    (NextStepKind::Scale, &["scale", "load balancer", "auto scaling"]),
    (NextStepKind::Database, &["database", "db", "mysql", "postgres"]),
    (
        NextStepKind::Trigger,
        &["trigger", "api gateway", "s3 trigger", "schedule"],
    ),
];

/// Classifies `message` into exactly one [`Intent`].
///
/// Case-insensitive substring matching; the returned intent always carries
/// the message exactly as received.
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();
    let original_message = message.to_string();

    if let Some(resource_type) = first_match(&lower, CREATE_PATTERNS) {
        return Intent::CreateResource {
            resource_type,
            original_message,
        };
    }

    if let Some(action) = first_match(&lower, MANAGE_PATTERNS) {
        return Intent::ManageResource {
            action,
            target: ResourceTarget::extract(message),
            original_message,
        };
    }

    if contains_any(&lower, COST_KEYWORDS) {
        return Intent::CostOptimization { original_message };
    }

    if contains_any(&lower, SECURITY_KEYWORDS) {
        return Intent::SecurityAction { original_message };
    }

    if let Some(action_type) = first_match(&lower, NEXT_STEP_PATTERNS) {
        return Intent::NextStepAction {
            action_type,
            original_message,
        };
    }

    Intent::QueryResources { original_message }
}

fn first_match<T: Copy>(lower: &str, table: &[(T, &[&str])]) -> Option<T> {
    table
        .iter()
        .find(|(_, patterns)| contains_any(lower, patterns))
        .map(|(value, _)| *value)
}

fn contains_any(lower: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|pattern| lower.contains(pattern))
}
