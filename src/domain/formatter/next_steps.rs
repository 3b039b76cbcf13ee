//! Next-step menus shown after a successful creation.

use crate::domain::resource::ResourceType;

const HEADER: &str = "🚀 **NEXT STEPS - What would you like to do?**";

const EC2_MENU: &[(&str, &[&str])] = &[
    ("Configure the Instance", &["Install web server on the instance", "Set up SSL certificate", "Configure auto-scaling"]),
    ("Connect & Access", &["Show me how to SSH into the instance", "Get the public IP address", "Open port 80 for web traffic"]),
    ("Add More Resources", &["Create a load balancer for this instance", "Add a database for this web server", "Set up monitoring and alerts"]),
    ("Cost Management", &["Set up auto-shutdown for nights/weekends", "Create billing alerts", "Show me cost optimization tips"]),
];

const LAMBDA_MENU: &[(&str, &[&str])] = &[
    ("Test the Function", &["Test the Lambda function with sample data", "Show me the function logs", "Update the function code"]),
    ("Add Triggers", &["Connect this to API Gateway", "Set up S3 trigger for file uploads", "Create a CloudWatch schedule"]),
    ("Enhance Functionality", &["Add environment variables", "Increase memory and timeout", "Add error handling and retries"]),
    ("Integration", &["Connect to a database", "Add SNS notifications", "Set up monitoring alerts"]),
];

const RDS_MENU: &[(&str, &[&str])] = &[
    ("Connect & Access", &["Show me how to connect to the database", "Get the database endpoint", "Allow access from my EC2 instance"]),
    ("Protect Your Data", &["Configure automated backups", "Enable encryption with SSL", "Set up a read replica"]),
    ("Monitor Performance", &["Set up monitoring and alerts", "Track slow queries", "Watch storage usage"]),
];

const S3_MENU: &[(&str, &[&str])] = &[
    ("Configure the Bucket", &["Set up static website hosting", "Configure lifecycle rules", "Enable server access logging"]),
    ("Secure the Bucket", &["Review bucket permissions", "Block public access", "Enable default encryption"]),
    ("Automate", &["Set up S3 trigger for file uploads", "Replicate to another region", "Track storage costs"]),
];

fn render(sections: &[(&str, &[&str])], closing: &str) -> String {
    let mut out = vec![HEADER.to_string(), String::new()];
    for (i, (title, options)) in sections.iter().enumerate() {
        out.push(format!("**Option {}: {}**", i + 1, title));
        out.extend(options.iter().map(|o| format!("   • \"{}\"", o)));
        out.push(String::new());
    }
    out.push(closing.to_string());
    out.join("\n")
}

/// Categorized follow-up suggestions for `resource_type`.
pub fn next_step_menu(resource_type: ResourceType) -> String {
    match resource_type {
        ResourceType::Ec2 => render(
            EC2_MENU,
            "**Just tell me what you'd like to do next, or ask a specific question!**",
        ),
        ResourceType::Lambda => render(LAMBDA_MENU, "**Just tell me what you'd like to do next!**"),
        ResourceType::Rds => render(RDS_MENU, "**Just tell me what you'd like to do next!**"),
        ResourceType::S3 => render(S3_MENU, "**Just tell me what you'd like to do next!**"),
        other => format!(
            "{}\n\n**Common Next Actions:**\n\
             \x20  • \"Configure the {name}\"\n\
             \x20  • \"Add monitoring and alerts\"\n\
             \x20  • \"Connect to other services\"\n\
             \x20  • \"Set up security and access\"\n\
             \x20  • \"Test the {name}\"\n\n\
             **Just tell me what you'd like to do next!**",
            HEADER,
            name = other.as_str()
        ),
    }
}
