//! Creation wizard - the ordered questions asked once a mode is chosen.
//!
//! Easy mode asks a single purpose question and fills the rest from
//! [`easy_defaults`](super::easy_defaults). Customize mode walks every
//! configurable field. Steps are 1-based; `wizard_step = n` means question
//! `n` has been asked and its answer is the next user message.

use std::collections::BTreeMap;

use crate::domain::resource::{CreationMode, ResourceType};

/// One question in a wizard sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardField {
    pub name: &'static str,
    pub question: &'static str,
    /// Answers are folded to `snake_case` tokens.
    pub normalize: bool,
}

const fn field(name: &'static str, question: &'static str) -> WizardField {
    WizardField {
        name,
        question,
        normalize: false,
    }
}

const fn token(name: &'static str, question: &'static str) -> WizardField {
    WizardField {
        name,
        question,
        normalize: true,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Easy mode
// ────────────────────────────────────────────────────────────────────────────

const EC2_EASY: &[WizardField] = &[token(
    "purpose",
    "What's the purpose of this EC2 instance? (web_server, database, development, api_server, general)",
)];

const LAMBDA_EASY: &[WizardField] = &[token(
    "purpose",
    "What should this Lambda function do? (image_processing, api_endpoint, data_processing, scheduled_task, general)",
)];

const RDS_EASY: &[WizardField] = &[token(
    "purpose",
    "What type of application will use this database? (ecommerce, analytics, development, production, general)",
)];

const S3_EASY: &[WizardField] = &[token(
    "purpose",
    "What will you store in this S3 bucket? (static_website, data_backup, logs, media_storage, general)",
)];

// ────────────────────────────────────────────────────────────────────────────
// Customize mode
// ────────────────────────────────────────────────────────────────────────────

const EC2_CUSTOM: &[WizardField] = &[
    field("name", "What should we name this instance?"),
    field("instance_type", "Which instance type? (t3.micro, t3.small, t3.medium, m5.large)"),
    field("ami", "Which operating system image? (amazon-linux-2, ubuntu-22.04, windows-2022)"),
    field("key_pair", "Which key pair should be used for SSH? (existing key name, or 'create-new')"),
    field("security_group", "Which security group? (default, web-server, or an existing group ID)"),
];

const LAMBDA_CUSTOM: &[WizardField] = &[
    field("function_name", "What should we name this function?"),
    field("runtime", "Which runtime? (python3.9, nodejs18.x, java11, go1.x)"),
    field("memory_mb", "How much memory in MB? (128 - 10240)"),
    field("timeout_secs", "Timeout in seconds? (3 - 900)"),
];

const RDS_CUSTOM: &[WizardField] = &[
    field("db_identifier", "What identifier should the database use?"),
    field("engine", "Which engine? (mysql, postgres, mariadb)"),
    field("instance_class", "Which instance class? (db.t3.micro, db.t3.medium, db.m5.large)"),
    field("storage_gb", "How much storage in GB? (20 - 1000)"),
];

const S3_CUSTOM: &[WizardField] = &[
    field("bucket_name", "What should the bucket be called? (globally unique, lowercase)"),
    field("region", "Which region? (us-east-1, us-west-2, eu-west-1)"),
    field("versioning", "Enable versioning? (enabled, disabled)"),
];

/// Question sequence for one resource type in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    resource_type: ResourceType,
    mode: CreationMode,
    fields: &'static [WizardField],
}

impl Wizard {
    /// Returns `None` for resource types the wizard cannot create.
    pub fn for_resource(resource_type: ResourceType, mode: CreationMode) -> Option<Self> {
        let fields = match (resource_type, mode) {
            (ResourceType::Ec2, CreationMode::Easy) => EC2_EASY,
            (ResourceType::Lambda, CreationMode::Easy) => LAMBDA_EASY,
            (ResourceType::Rds, CreationMode::Easy) => RDS_EASY,
            (ResourceType::S3, CreationMode::Easy) => S3_EASY,
            (ResourceType::Ec2, CreationMode::Customize) => EC2_CUSTOM,
            (ResourceType::Lambda, CreationMode::Customize) => LAMBDA_CUSTOM,
            (ResourceType::Rds, CreationMode::Customize) => RDS_CUSTOM,
            (ResourceType::S3, CreationMode::Customize) => S3_CUSTOM,
            (ResourceType::Vpc | ResourceType::Alb, _) => return None,
        };
        Some(Self {
            resource_type,
            mode,
            fields,
        })
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn mode(&self) -> CreationMode {
        self.mode
    }

    pub fn fields(&self) -> &'static [WizardField] {
        self.fields
    }

    pub fn total_steps(&self) -> u32 {
        self.fields.len() as u32
    }

    /// Field asked at the 1-based `step`.
    pub fn field_at(&self, step: u32) -> Option<&'static WizardField> {
        let index = step.checked_sub(1)? as usize;
        self.fields.get(index)
    }

    /// True once every field has an answer.
    pub fn is_complete(&self, collected: &BTreeMap<String, String>) -> bool {
        self.fields.iter().all(|f| collected.contains_key(f.name))
    }

    /// Canonical form of a raw answer for `field`.
    pub fn normalize_answer(field: &WizardField, raw: &str) -> String {
        let trimmed = raw.trim();
        if field.normalize {
            trimmed
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("_")
        } else {
            trimmed.to_string()
        }
    }

    /// Text shown right after the mode is chosen; it always ends by asking
    /// question 1.
    pub fn opening_prompt(&self) -> String {
        let first = self.fields.first().map(|f| f.question).unwrap_or_default();
        match self.mode {
            CreationMode::Easy => format!(
                "🟢 **Easy Mode Selected**\n\nI'll pick sensible defaults for your {}. One question first:\n\n{}",
                self.resource_type.label(),
                first
            ),
            CreationMode::Customize => {
                let overview = self
                    .fields
                    .iter()
                    .enumerate()
                    .map(|(i, f)| format!("{}. {}", i + 1, f.name))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "🔧 **Customize Mode Selected**\n\n\
                     I'll walk you through {} settings for your {}:\n{}\n\n\
                     **Step 1/{}:** {}",
                    self.fields.len(),
                    self.resource_type.label(),
                    overview,
                    self.total_steps(),
                    first
                )
            }
        }
    }

    /// Prompt for the 1-based `step`, or `None` past the end.
    pub fn question_for_step(&self, step: u32) -> Option<String> {
        let field = self.field_at(step)?;
        Some(format!(
            "**Step {}/{}:** {}",
            step,
            self.total_steps(),
            field.question
        ))
    }
}
