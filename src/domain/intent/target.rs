//! Extraction of the resource a management command refers to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::resource::ResourceType;

/// Prefixes of AWS identifiers the agent recognises in free text.
const ID_PREFIXES: &[&str] = &["i-", "db-", "vpc-", "sg-", "subnet-", "vol-", "arn:"];

/// What a management command targets, as far as keywords can tell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
}

impl ResourceTarget {
    /// Pulls the first AWS-looking identifier and the first mentioned
    /// resource type out of `message`.
    pub fn extract(message: &str) -> Self {
        let lower = message.to_lowercase();

        let resource_id = message
            .split_whitespace()
            .map(|word| {
                word.trim_matches(|c: char| matches!(c, ',' | '.' | ';' | '!' | '?' | '"' | '\'' | '(' | ')'))
            })
            .find(|word| {
                let word = word.to_lowercase();
                ID_PREFIXES
                    .iter()
                    .any(|prefix| word.starts_with(prefix) && word.len() > prefix.len())
            })
            .map(str::to_string);

        let resource_type = ResourceType::all()
            .iter()
            .copied()
            .find(|r| r.keywords().iter().any(|k| lower.contains(k)));

        Self {
            resource_id,
            resource_type,
        }
    }
}

impl fmt::Display for ResourceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.resource_type, &self.resource_id) {
            (Some(kind), Some(id)) => write!(f, "{} {}", kind.label(), id),
            (None, Some(id)) => write!(f, "{}", id),
            (Some(kind), None) => write!(f, "the {} resource", kind.label()),
            (None, None) => write!(f, "the selected resource"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_instance_id_and_type() {
        let target = ResourceTarget::extract("Stop instance i-0abc123, please");
        assert_eq!(target.resource_id.as_deref(), Some("i-0abc123"));
        assert_eq!(target.resource_type, Some(ResourceType::Ec2));
        assert_eq!(target.to_string(), "EC2 i-0abc123");
    }

    #[test]
    fn extracts_type_without_id() {
        let target = ResourceTarget::extract("delete my bucket");
        assert_eq!(target.resource_id, None);
        assert_eq!(target.resource_type, Some(ResourceType::S3));
        assert_eq!(target.to_string(), "the S3 resource");
    }

    #[test]
    fn bare_prefix_is_not_an_identifier() {
        let target = ResourceTarget::extract("stop i- now");
        assert_eq!(target.resource_id, None);
    }

    #[test]
    fn unspecified_target_has_generic_description() {
        let target = ResourceTarget::extract("stop");
        assert_eq!(target, ResourceTarget::default());
        assert_eq!(target.to_string(), "the selected resource");
    }
}
