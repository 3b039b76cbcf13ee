//! Canned guidance for follow-up requests.
//!
//! Each category has a detailed answer for its most common sub-topic and a
//! clarifying question for everything else.

use crate::domain::intent::NextStepKind;

const WEB_SERVER: &str = "✅ **Installing a Web Server**

🔧 **Steps:**
   1. Connect to the EC2 instance
   2. Install Apache or Nginx
   3. Open ports 80/443 in the security group
   4. Start and enable the web server service
   5. Drop a sample index.html into /var/www/html

🌐 **Once running:**
   • Public URL: http://<instance-public-ip>
   • Document root: /var/www/html

🚀 **Next steps:**
   • \"Set up SSL certificate\"
   • \"Add a database for this web server\"
   • \"Set up monitoring and alerts\"

What would you like to do next?";

const SSH: &str = "✅ **SSH Connection Guide**

🔑 **Connection Details:**
   • Username: ec2-user (Amazon Linux) or ubuntu (Ubuntu)
   • Key: the key pair chosen at launch

💻 **SSH Command:**
```bash
ssh -i <key-pair>.pem ec2-user@<instance-public-ip>
```

🔧 **Check first:**
   • Security group allows SSH (port 22) from your IP
   • Key file permissions are 400
   • Instance state is running

What would you like to do after connecting?";

const LAMBDA_TEST: &str = "✅ **Testing a Lambda Function**

📊 **How to test:**
   • Invoke with a sample payload such as {\"test\": \"data\"}
   • Check the response and execution duration
   • Review the CloudWatch log stream for errors

📈 **Watch these metrics:**
   • Cold start vs warm execution time
   • Error rate and throttles
   • Memory used vs configured

🚀 **Next steps:**
   • \"Connect this to API Gateway\"
   • \"Add error handling and retries\"
   • \"Set up monitoring alerts\"

What would you like to do next?";

const MONITORING: &str = "✅ **Setting Up Monitoring**

📊 **Recommended alarms:**
   • CPU utilization above 80%
   • Memory utilization alerts
   • Disk space monitoring
   • Network traffic tracking

📧 **Alert destinations:**
   • Email through an SNS topic
   • Chat integration (optional)

🚀 **Next steps:**
   • \"Create custom dashboard\"
   • \"Set up log analysis\"
   • \"Configure auto-scaling based on metrics\"

What monitoring feature would you like to add next?";

const SECURITY: &str = "✅ **Securing Your Resource**

🔒 **Recommended hardening:**
   • Request a certificate in ACM and terminate HTTPS at a load balancer
   • Restrict security group ingress to known addresses
   • Enable encryption at rest
   • Grant IAM roles least-privilege permissions

🚀 **Next steps:**
   • \"Review security group rules\"
   • \"Enable default encryption\"

Which of these would you like to start with?";

const SCALING: &str = "✅ **Scaling Your Workload**

📈 **Options:**
   • Auto Scaling group with target tracking on CPU
   • Application Load Balancer in front of the group
   • Scheduled scaling for predictable peaks

🚀 **Next steps:**
   • \"Create a load balancer for this instance\"
   • \"Configure auto-scaling based on metrics\"

How much traffic are you expecting?";

const DATABASE: &str = "✅ **Adding a Database for Your Application**

📊 **Recommended Setup:**
   • Engine: MySQL 8.0
   • Instance: db.t3.medium
   • Storage: 100GB (auto-scaling)
   • Multi-AZ: Yes (high availability)
   • Backup: 7 days retention

🔧 **Networking:**
   • Private subnet placement
   • Security group allowing access from your application only
   • Encryption at rest

Say \"create database\" to start the creation wizard, or tell me what you'd like to prepare first.";

const TRIGGER: &str = "✅ **Wiring Up Triggers**

⚡ **Common event sources:**
   • API Gateway for HTTP endpoints
   • S3 events for file uploads
   • EventBridge schedules for periodic jobs

🚀 **Next steps:**
   • \"Connect this to API Gateway\"
   • \"Set up S3 trigger for file uploads\"
   • \"Create a CloudWatch schedule\"

Which trigger would you like to add?";

/// Canned reply for a follow-up request. Never mutates state.
pub fn next_step_guidance(kind: NextStepKind, message: &str) -> String {
    let lower = message.to_lowercase();
    let reply = match kind {
        NextStepKind::Install if lower.contains("web server") => WEB_SERVER,
        NextStepKind::Install => {
            "I can help install various software. What specifically would you like to install?"
        }
        NextStepKind::Connect if lower.contains("ssh") => SSH,
        NextStepKind::Connect => {
            "I can help you connect to your AWS resources. Which resource do you want to connect to?"
        }
        NextStepKind::Test if lower.contains("lambda") || lower.contains("function") => LAMBDA_TEST,
        NextStepKind::Test => "I can help test your AWS resources. What would you like to test?",
        NextStepKind::Monitor => MONITORING,
        NextStepKind::Secure => SECURITY,
        NextStepKind::Scale => SCALING,
        NextStepKind::Database => DATABASE,
        NextStepKind::Trigger => TRIGGER,
    };
    reply.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_web_server_gets_detailed_steps() {
        let reply = next_step_guidance(NextStepKind::Install, "Install web server on the instance");
        assert!(reply.starts_with("✅ **Installing a Web Server**"));
    }

    #[test]
    fn install_without_topic_asks_back() {
        let reply = next_step_guidance(NextStepKind::Install, "install something");
        assert_eq!(
            reply,
            "I can help install various software. What specifically would you like to install?"
        );
    }

    #[test]
    fn connect_ssh_shows_command() {
        let reply = next_step_guidance(NextStepKind::Connect, "show me how to ssh in");
        assert!(reply.contains("ssh -i"));
    }

    #[test]
    fn test_without_lambda_asks_back() {
        let reply = next_step_guidance(NextStepKind::Test, "test it");
        assert!(reply.ends_with("What would you like to test?"));
    }

    #[test]
    fn every_kind_has_a_reply() {
        for kind in [
            NextStepKind::Install,
            NextStepKind::Connect,
            NextStepKind::Test,
            NextStepKind::Monitor,
            NextStepKind::Secure,
            NextStepKind::Scale,
            NextStepKind::Database,
            NextStepKind::Trigger,
        ] {
            assert!(!next_step_guidance(kind, "x").is_empty());
        }
    }
}
