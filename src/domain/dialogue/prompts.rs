//! Fixed system utterances.

use crate::domain::intent::{ManagementAction, ResourceTarget};
use crate::domain::resource::ResourceType;

/// Prefix of every failure reply.
pub const ERROR_MARKER: &str = "❌";

/// Prefix of every success reply.
pub const SUCCESS_MARKER: &str = "✅";

/// Reply to a query whose result carries no message.
pub const NO_RESULTS: &str = "No results found.";

/// Reply to a cancelled confirmation.
pub const ACTION_CANCELLED: &str = "❌ Action cancelled.";

/// Offers the Easy/Customize choice for a freshly requested resource.
pub fn mode_choice(resource_type: ResourceType) -> String {
    format!(
        "🚀 **Creating {label} Resource**\n\n\
         Choose your setup approach:\n\n\
         🟢 **EASY MODE** (30-60 seconds)\n\
         • Answer one question about your use case\n\
         • Smart defaults for everything else\n\n\
         🔧 **CUSTOMIZE MODE** (2-5 minutes)\n\
         • Pick every configuration option yourself\n\
         • Full control over sizing and naming\n\n\
         Which would you prefer? (Type 'easy' or 'customize')",
        label = resource_type.label()
    )
}

/// Asks the user to confirm a management action.
pub fn confirmation_request(action: ManagementAction, target: &ResourceTarget) -> String {
    let mut prompt = format!(
        "⚠️ **Confirm {verb}**\n\nYou're about to {verb} {target}.",
        verb = action.as_str(),
        target = target
    );
    if action.is_irreversible() {
        prompt.push_str(" Running workloads on it will be interrupted.");
    }
    prompt.push_str("\n\nType 'confirm' to proceed or 'cancel' to abort.");
    prompt
}

/// Reply after a confirmed action returns from the gateway.
pub fn action_executed(message: Option<&str>) -> String {
    format!(
        "{} Action executed: {}",
        SUCCESS_MARKER,
        message.unwrap_or("Completed successfully")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_choice_names_both_modes() {
        let prompt = mode_choice(ResourceType::Ec2);
        assert!(prompt.contains("Creating EC2 Resource"));
        assert!(prompt.contains("EASY MODE"));
        assert!(prompt.contains("CUSTOMIZE MODE"));
        assert!(prompt.ends_with("(Type 'easy' or 'customize')"));
    }

    #[test]
    fn confirmation_request_names_target() {
        let target = ResourceTarget::extract("stop instance i-0abc123");
        let prompt = confirmation_request(ManagementAction::Stop, &target);
        assert!(prompt.contains("stop EC2 i-0abc123"));
        assert!(prompt.contains("'confirm'"));
    }

    #[test]
    fn action_executed_falls_back_to_generic_message() {
        assert_eq!(action_executed(None), "✅ Action executed: Completed successfully");
        assert_eq!(action_executed(Some("Stopped")), "✅ Action executed: Stopped");
    }
}
