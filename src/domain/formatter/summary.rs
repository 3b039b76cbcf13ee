//! Creation summaries.

use std::collections::BTreeMap;

use super::next_steps::next_step_menu;
use crate::domain::dialogue::prompts::SUCCESS_MARKER;
use crate::domain::execution::ToolResult;
use crate::domain::resource::ResourceType;

const NA: &str = "N/A";

/// Appended to every creation summary.
pub const OBSERVABILITY_FOOTER: &str = "📊 **Observability Enabled:**\n\
    \x20  • CloudWatch Logs: All operations logged\n\
    \x20  • CloudWatch Metrics: Performance tracking\n\
    \x20  • X-Ray Tracing: Request flow monitoring\n\
    \x20  • Conversation Memory: History stored per user";

/// Looks a value up in the result first, then in the submitted config.
fn lookup(result: &ToolResult, config: &BTreeMap<String, String>, key: &str) -> String {
    result
        .field(key)
        .or_else(|| config.get(key).filter(|v| !v.is_empty()).cloned())
        .unwrap_or_else(|| NA.to_string())
}

fn estimated_cost(result: &ToolResult, instance_type: &str) -> String {
    if let Some(cost) = result.field("estimated_cost") {
        return cost;
    }
    match instance_type {
        "t3.micro" => "~$8/month",
        "t3.small" => "~$15/month",
        "t3.medium" => "~$30/month",
        "m5.large" => "~$70/month",
        _ => NA,
    }
    .to_string()
}

fn bullet(label: &str, value: impl AsRef<str>) -> String {
    format!("   • {}: {}", label, value.as_ref())
}

/// Per-resource detail block followed by the observability footer.
pub fn creation_summary(
    resource_type: ResourceType,
    result: &ToolResult,
    config: &BTreeMap<String, String>,
) -> String {
    let get = |key: &str| lookup(result, config, key);
    let mut lines = vec![format!(
        "{} **{} CREATED SUCCESSFULLY**",
        SUCCESS_MARKER,
        resource_type.label()
    )];
    if let Some(message) = result.message.as_deref().filter(|m| !m.is_empty()) {
        lines.push(message.to_string());
    }
    lines.push(String::new());

    match resource_type {
        ResourceType::Ec2 => {
            let instance_type = get("instance_type");
            lines.push("🖥️ **Instance Details:**".to_string());
            lines.push(bullet("Instance ID", get("instance_id")));
            lines.push(bullet("Instance Type", &instance_type));
            lines.push(bullet("Name", get("name")));
            lines.push(bullet("Purpose", get("purpose")));
            lines.push(bullet("Status", "Launching (takes 2-3 minutes)"));
            lines.push(bullet("Estimated Cost", estimated_cost(result, &instance_type)));
            lines.push(String::new());
            lines.push("🔧 **Auto-Created Resources:**".to_string());
            lines.push(bullet("Security Group", get("security_group")));
            lines.push(bullet("Key Pair", get("key_pair")));
            lines.push(bullet("CloudWatch Logs", "/aws/ec2/instances"));
        }
        ResourceType::Lambda => {
            let function_name = get("function_name");
            let memory = get("memory_mb");
            let timeout = get("timeout_secs");
            lines.push("⚡ **Function Details:**".to_string());
            lines.push(bullet("Function Name", &function_name));
            lines.push(bullet("Function ARN", get("function_arn")));
            lines.push(bullet("Runtime", get("runtime")));
            lines.push(bullet("Memory", with_unit(&memory, "MB")));
            lines.push(bullet("Timeout", with_unit(&timeout, " seconds")));
            lines.push(bullet("Purpose", get("purpose")));
            lines.push(String::new());
            lines.push("🔧 **Auto-Created Resources:**".to_string());
            lines.push(bullet("IAM Execution Role", "lambda-execution-role"));
            let log_group = if function_name == NA {
                "/aws/lambda/function".to_string()
            } else {
                format!("/aws/lambda/{}", function_name)
            };
            lines.push(bullet("CloudWatch Log Group", log_group));
        }
        ResourceType::Rds => {
            lines.push("🗄️ **Database Details:**".to_string());
            lines.push(bullet("DB Identifier", get("db_identifier")));
            lines.push(bullet("Engine", get("engine")));
            lines.push(bullet("Instance Class", get("instance_class")));
            lines.push(bullet("Storage", with_unit(&get("storage_gb"), "GB")));
            lines.push(bullet("Endpoint", get("endpoint")));
            lines.push(bullet("Purpose", get("purpose")));
            lines.push(bullet("Status", "Creating (takes ~10 minutes)"));
        }
        ResourceType::S3 => {
            lines.push("🪣 **Bucket Details:**".to_string());
            lines.push(bullet("Bucket Name", get("bucket_name")));
            lines.push(bullet("Region", get("region")));
            lines.push(bullet("Versioning", get("versioning")));
            lines.push(bullet("Purpose", get("purpose")));
        }
        ResourceType::Vpc | ResourceType::Alb => {
            lines.push("📦 **Resource Details:**".to_string());
            lines.push(bullet("Resource ID", get("resource_id")));
        }
    }

    lines.push(String::new());
    lines.push(OBSERVABILITY_FOOTER.to_string());
    lines.join("\n")
}

fn with_unit(value: &str, unit: &str) -> String {
    if value == NA {
        value.to_string()
    } else {
        format!("{}{}", value, unit)
    }
}

/// Full reply for a successful creation: summary then next-step menu.
pub fn creation_reply(
    resource_type: ResourceType,
    result: &ToolResult,
    config: &BTreeMap<String, String>,
) -> String {
    format!(
        "{}\n\n{}",
        creation_summary(resource_type, result, config),
        next_step_menu(resource_type)
    )
}
