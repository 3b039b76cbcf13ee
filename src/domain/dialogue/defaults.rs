//! Easy-mode defaults keyed by resource and stated purpose.
//!
//! Unknown purposes resolve to the `general` row.

use std::collections::BTreeMap;

use crate::domain::resource::ResourceType;

type Row = (&'static str, &'static [(&'static str, &'static str)]);

const EC2: &[Row] = &[
    ("web_server", &[("instance_type", "t3.medium"), ("ami", "amazon-linux-2"), ("security_group", "web-server")]),
    ("database", &[("instance_type", "m5.large"), ("ami", "amazon-linux-2"), ("security_group", "database")]),
    ("development", &[("instance_type", "t3.small"), ("ami", "amazon-linux-2"), ("security_group", "default")]),
    ("api_server", &[("instance_type", "t3.medium"), ("ami", "amazon-linux-2"), ("security_group", "web-server")]),
    ("general", &[("instance_type", "t3.micro"), ("ami", "amazon-linux-2"), ("security_group", "default")]),
];

const LAMBDA: &[Row] = &[
    ("image_processing", &[("runtime", "python3.9"), ("memory_mb", "1024"), ("timeout_secs", "120")]),
    ("api_endpoint", &[("runtime", "python3.9"), ("memory_mb", "512"), ("timeout_secs", "30")]),
    ("data_processing", &[("runtime", "python3.9"), ("memory_mb", "1024"), ("timeout_secs", "300")]),
    ("scheduled_task", &[("runtime", "python3.9"), ("memory_mb", "256"), ("timeout_secs", "60")]),
    ("general", &[("runtime", "python3.9"), ("memory_mb", "512"), ("timeout_secs", "60")]),
];

const RDS: &[Row] = &[
    ("ecommerce", &[("engine", "mysql"), ("instance_class", "db.t3.medium"), ("storage_gb", "100"), ("multi_az", "true")]),
    ("analytics", &[("engine", "postgres"), ("instance_class", "db.r5.large"), ("storage_gb", "500"), ("multi_az", "false")]),
    ("development", &[("engine", "mysql"), ("instance_class", "db.t3.micro"), ("storage_gb", "20"), ("multi_az", "false")]),
    ("production", &[("engine", "mysql"), ("instance_class", "db.m5.large"), ("storage_gb", "200"), ("multi_az", "true")]),
    ("general", &[("engine", "mysql"), ("instance_class", "db.t3.small"), ("storage_gb", "20"), ("multi_az", "false")]),
];

const S3: &[Row] = &[
    ("static_website", &[("versioning", "disabled"), ("website_hosting", "enabled"), ("public_access", "read")]),
    ("data_backup", &[("versioning", "enabled"), ("lifecycle", "glacier_after_30_days"), ("public_access", "blocked")]),
    ("logs", &[("versioning", "disabled"), ("lifecycle", "expire_after_90_days"), ("public_access", "blocked")]),
    ("media_storage", &[("versioning", "enabled"), ("storage_class", "standard"), ("public_access", "blocked")]),
    ("general", &[("versioning", "enabled"), ("public_access", "blocked")]),
];

fn table(resource_type: ResourceType) -> &'static [Row] {
    match resource_type {
        ResourceType::Ec2 => EC2,
        ResourceType::Lambda => LAMBDA,
        ResourceType::Rds => RDS,
        ResourceType::S3 => S3,
        ResourceType::Vpc | ResourceType::Alb => &[],
    }
}

/// Merges the defaults for `purpose` underneath the collected answers.
///
/// Collected values always win over defaults.
pub fn easy_defaults(
    resource_type: ResourceType,
    collected: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let rows = table(resource_type);
    let purpose = collected.get("purpose").map(String::as_str).unwrap_or("general");
    let row = rows
        .iter()
        .find(|(name, _)| *name == purpose)
        .or_else(|| rows.iter().find(|(name, _)| *name == "general"));

    let mut config: BTreeMap<String, String> = row
        .map(|(_, values)| {
            values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .unwrap_or_default();
    for (key, value) in collected {
        config.insert(key.clone(), value.clone());
    }
    config
}
