//! End-to-end dialogue tests.
//!
//! These tests drive whole conversations through `HandleTurnHandler` with the
//! mock execution gateway and real storage adapters:
//! 1. Creation wizards in both modes, through to the gateway call
//! 2. Confirm/cancel of management actions
//! 3. Session state surviving a handler rebuilt on the same store
//! 4. Failures that must stay in-band

use std::sync::Arc;

use async_trait::async_trait;
use proptest::prelude::*;

use aws_ops_agent::adapters::{
    FileSessionStore, InMemoryConversationLog, InMemorySessionStore, MockExecutionGateway,
    UnconfiguredExecutionGateway,
};
use aws_ops_agent::adapters::gateway::MockError;
use aws_ops_agent::application::{
    GetSessionHandler, GetSessionQuery, HandleTurnCommand, HandleTurnHandler,
};
use aws_ops_agent::domain::dialogue::DialogueStage;
use aws_ops_agent::domain::execution::{ToolRequest, ToolResult};
use aws_ops_agent::domain::foundation::UserId;
use aws_ops_agent::domain::intent::ManagementAction;
use aws_ops_agent::domain::resource::{CreationMode, ResourceType};
use aws_ops_agent::ports::{ConversationLog, ConversationLogError, SessionStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Conversation log that rejects every append.
struct FailingConversationLog;

#[async_trait]
impl ConversationLog for FailingConversationLog {
    async fn append(&self, _user_id: &UserId, _text: &str) -> Result<(), ConversationLogError> {
        Err(ConversationLogError::Unavailable("disk full".to_string()))
    }
}

struct Harness {
    handler: HandleTurnHandler,
    store: Arc<dyn SessionStore>,
    gateway: MockExecutionGateway,
    log: InMemoryConversationLog,
}

impl Harness {
    fn new(gateway: MockExecutionGateway) -> Self {
        Self::with_store(gateway, Arc::new(InMemorySessionStore::new()))
    }

    fn with_store(gateway: MockExecutionGateway, store: Arc<dyn SessionStore>) -> Self {
        let log = InMemoryConversationLog::new();
        let handler = HandleTurnHandler::new(
            store.clone(),
            Arc::new(gateway.clone()),
            Arc::new(log.clone()),
        );
        Self {
            handler,
            store,
            gateway,
            log,
        }
    }

    async fn say(&self, user: &str, message: &str) -> String {
        self.handler
            .handle(HandleTurnCommand {
                user_id: UserId::new(user).unwrap(),
                message: message.to_string(),
            })
            .await
            .unwrap()
            .reply
    }

    async fn stage(&self, user: &str) -> DialogueStage {
        GetSessionHandler::new(self.store.clone())
            .handle(GetSessionQuery {
                user_id: UserId::new(user).unwrap(),
            })
            .await
            .unwrap()
            .stage()
    }
}

// =============================================================================
// Creation wizards
// =============================================================================

#[tokio::test]
async fn customize_ec2_walks_every_question_then_creates() {
    let gateway = MockExecutionGateway::new().with_result(
        ToolResult::success("Instance launched").with_field("instance_id", "i-0123456789"),
    );
    let h = Harness::new(gateway);

    let reply = h.say("alice", "please create ec2 for my blog").await;
    assert!(reply.contains("Creating EC2 Resource"));
    assert_eq!(h.stage("alice").await, DialogueStage::AwaitingMode);

    let reply = h.say("alice", "customize").await;
    assert!(reply.starts_with("🔧 **Customize Mode Selected**"));
    assert!(reply.contains("**Step 1/5:**"));

    assert!(h.say("alice", "web-1").await.contains("**Step 2/5:**"));
    assert!(h.say("alice", "t3.small").await.contains("**Step 3/5:**"));
    assert!(h.say("alice", "amazon-linux-2").await.contains("**Step 4/5:**"));
    assert!(h.say("alice", "my-key").await.contains("**Step 5/5:**"));
    assert_eq!(h.gateway.call_count(), 0);

    let reply = h.say("alice", "web-server").await;
    assert!(reply.contains("✅ **EC2 CREATED SUCCESSFULLY**"));
    assert!(reply.contains("i-0123456789"));
    assert!(reply.contains("~$15/month"));
    assert!(reply.contains("NEXT STEPS"));

    match h.gateway.last_call() {
        Some(ToolRequest::Create {
            resource_type,
            mode,
            config,
        }) => {
            assert_eq!(resource_type, ResourceType::Ec2);
            assert_eq!(mode, CreationMode::Customize);
            assert_eq!(config.len(), 5);
            assert_eq!(config.get("name").map(String::as_str), Some("web-1"));
            assert_eq!(config.get("key_pair").map(String::as_str), Some("my-key"));
        }
        other => panic!("expected a create call, got {:?}", other),
    }
    assert_eq!(h.stage("alice").await, DialogueStage::Idle);
}

#[tokio::test]
async fn easy_s3_merges_purpose_defaults() {
    let h = Harness::new(MockExecutionGateway::new());

    h.say("bob", "new bucket please").await;
    let reply = h.say("bob", "EASY").await;
    assert!(reply.starts_with("🟢 **Easy Mode Selected**"));

    let reply = h.say("bob", "Data Backup").await;
    assert!(reply.contains("S3 CREATED SUCCESSFULLY"));

    let Some(ToolRequest::Create { config, .. }) = h.gateway.last_call() else {
        panic!("expected a create call");
    };
    assert_eq!(config.get("purpose").map(String::as_str), Some("data_backup"));
    assert_eq!(config.get("versioning").map(String::as_str), Some("enabled"));
    assert_eq!(
        config.get("lifecycle").map(String::as_str),
        Some("glacier_after_30_days")
    );
}

#[tokio::test]
async fn failed_creation_still_resets_the_wizard() {
    let gateway = MockExecutionGateway::new().with_result(ToolResult::failure("quota exceeded"));
    let h = Harness::new(gateway);

    h.say("carol", "create lambda").await;
    h.say("carol", "easy").await;
    let reply = h.say("carol", "api_endpoint").await;

    assert_eq!(reply, "❌ Failed to create lambda: quota exceeded");
    assert_eq!(h.stage("carol").await, DialogueStage::Idle);
}

/// Finishes an easy EC2 creation, then asks for another EC2 instance.
async fn create_ec2_twice(h: &Harness, user: &str) -> String {
    h.say(user, "create ec2").await;
    h.say(user, "easy").await;
    h.say(user, "web_server").await;
    assert_eq!(h.stage(user).await, DialogueStage::Idle);
    h.say(user, "create ec2").await
}

async fn assert_fresh_mode_choice(h: &Harness, user: &str, reply: &str) {
    assert!(reply.contains("Creating EC2 Resource"));
    assert!(reply.contains("EASY MODE"));
    assert!(reply.contains("CUSTOMIZE MODE"));

    let session = GetSessionHandler::new(h.store.clone())
        .handle(GetSessionQuery {
            user_id: UserId::new(user).unwrap(),
        })
        .await
        .unwrap();
    assert_eq!(session.stage(), DialogueStage::AwaitingMode);
    assert_eq!(
        session.pending_creation().map(|p| p.resource_type),
        Some(ResourceType::Ec2)
    );
    assert!(session.collected_config().is_empty());
}

#[tokio::test]
async fn new_creation_after_success_starts_from_mode_choice() {
    let h = Harness::new(MockExecutionGateway::new().with_result(ToolResult::success("Launched")));

    let reply = create_ec2_twice(&h, "ivan").await;

    assert_fresh_mode_choice(&h, "ivan", &reply).await;
    assert_eq!(h.gateway.call_count(), 1);
}

#[tokio::test]
async fn new_creation_after_failure_starts_from_mode_choice() {
    let h = Harness::new(MockExecutionGateway::new().with_result(ToolResult::failure("quota exceeded")));

    let reply = create_ec2_twice(&h, "judy").await;

    assert_fresh_mode_choice(&h, "judy", &reply).await;
}

#[tokio::test]
async fn new_creation_after_transport_error_starts_from_mode_choice() {
    let gateway = MockExecutionGateway::new().with_error(MockError::Network {
        message: "connection reset".to_string(),
    });
    let h = Harness::new(gateway);

    let reply = create_ec2_twice(&h, "kim").await;

    assert_fresh_mode_choice(&h, "kim", &reply).await;
}

#[tokio::test]
async fn vpc_is_recognized_but_not_creatable() {
    let h = Harness::new(MockExecutionGateway::new());

    assert!(h.say("dave", "create vpc").await.contains("Creating VPC Resource"));
    let reply = h.say("dave", "easy").await;

    assert!(reply.starts_with("❌ VPC creation isn't supported yet."));
    assert_eq!(h.stage("dave").await, DialogueStage::Idle);
    assert_eq!(h.gateway.call_count(), 0);
}

#[tokio::test]
async fn mode_token_without_pending_creation_is_rejected() {
    let h = Harness::new(MockExecutionGateway::new());

    let reply = h.say("erin", "customize").await;

    assert_eq!(reply, "❌ No pending resource creation found.");
    assert_eq!(h.stage("erin").await, DialogueStage::Idle);
}

// =============================================================================
// Management confirmations
// =============================================================================

#[tokio::test]
async fn stop_waits_for_confirmation_then_executes() {
    let gateway = MockExecutionGateway::new().with_result(ToolResult::success("Stopping i-0abc123"));
    let h = Harness::new(gateway);

    let reply = h.say("frank", "stop instance i-0abc123").await;
    assert!(reply.contains("You're about to stop EC2 i-0abc123."));
    assert_eq!(h.stage("frank").await, DialogueStage::AwaitingConfirmation);
    assert_eq!(h.gateway.call_count(), 0);

    let reply = h.say("frank", "Yes").await;
    assert_eq!(reply, "✅ Action executed: Stopping i-0abc123");

    match h.gateway.last_call() {
        Some(ToolRequest::Manage(pending)) => {
            assert_eq!(pending.action, ManagementAction::Stop);
            assert_eq!(pending.original_message, "stop instance i-0abc123");
        }
        other => panic!("expected a manage call, got {:?}", other),
    }
    assert_eq!(h.stage("frank").await, DialogueStage::Idle);
    assert_eq!(h.log.entries().await.len(), 1);
}

#[tokio::test]
async fn cancel_clears_confirmation_without_calling_gateway() {
    let h = Harness::new(MockExecutionGateway::new());

    h.say("gina", "delete bucket old-logs").await;
    let reply = h.say("gina", "cancel").await;

    assert_eq!(reply, "❌ Action cancelled.");
    assert_eq!(h.gateway.call_count(), 0);
    assert_eq!(h.stage("gina").await, DialogueStage::Idle);
}

#[tokio::test]
async fn transport_error_keeps_confirmation_for_retry() {
    let gateway = MockExecutionGateway::new()
        .with_error(MockError::Network {
            message: "connection reset".to_string(),
        })
        .with_result(ToolResult::success("Restarted"));
    let h = Harness::new(gateway);

    h.say("hank", "restart i-0abc123").await;
    let reply = h.say("hank", "confirm").await;
    assert!(reply.starts_with("❌ Failed to restart"));
    assert_eq!(h.stage("hank").await, DialogueStage::AwaitingConfirmation);

    let reply = h.say("hank", "confirm").await;
    assert_eq!(reply, "✅ Action executed: Restarted");
    assert_eq!(h.gateway.call_count(), 2);
}

#[tokio::test]
async fn unconfigured_gateway_refuses_confirmed_action() {
    let handler = HandleTurnHandler::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(UnconfiguredExecutionGateway),
        Arc::new(InMemoryConversationLog::new()),
    );
    let say = |message: &str| HandleTurnCommand {
        user_id: UserId::new("lena").unwrap(),
        message: message.to_string(),
    };

    handler.handle(say("stop i-0abc123")).await.unwrap();
    let reply = handler.handle(say("confirm")).await.unwrap().reply;

    assert!(reply.starts_with("❌ Failed to stop"));
    assert!(reply.contains("no execution gateway is configured"));
}

// =============================================================================
// Queries and guidance
// =============================================================================

#[tokio::test]
async fn cost_question_goes_to_query_tool() {
    let gateway = MockExecutionGateway::new()
        .with_result(ToolResult::success("2 idle instances could save $40/month"));
    let h = Harness::new(gateway);

    let reply = h.say("ivan", "where can I save money?").await;

    assert_eq!(reply, "2 idle instances could save $40/month");
    assert_eq!(
        h.gateway.last_call().map(|c| c.tool_name()),
        Some("comprehensive_aws_query".to_string())
    );
}

#[tokio::test]
async fn empty_query_result_reads_no_results() {
    let h = Harness::new(MockExecutionGateway::new().with_result(ToolResult::default()));

    let reply = h.say("judy", "list my buckets").await;

    assert_eq!(reply, "No results found.");
}

// =============================================================================
// Persistence and isolation
// =============================================================================

#[tokio::test]
async fn wizard_resumes_after_handler_restart() {
    let dir = tempfile::tempdir().unwrap();

    let first = Harness::with_store(
        MockExecutionGateway::new(),
        Arc::new(FileSessionStore::new(dir.path())),
    );
    first.say("kate", "create rds").await;
    first.say("kate", "customize").await;
    first.say("kate", "orders-db").await;
    drop(first);

    let second = Harness::with_store(
        MockExecutionGateway::new(),
        Arc::new(FileSessionStore::new(dir.path())),
    );
    assert_eq!(second.stage("kate").await, DialogueStage::Collecting);
    assert!(second.say("kate", "postgres").await.contains("**Step 3/4:**"));
}

#[tokio::test]
async fn users_do_not_share_dialogue_state() {
    let h = Harness::new(MockExecutionGateway::new());

    h.say("leo", "create ec2").await;
    let reply = h.say("mia", "easy").await;

    assert_eq!(reply, "❌ No pending resource creation found.");
    assert_eq!(h.stage("leo").await, DialogueStage::AwaitingMode);
}

#[tokio::test]
async fn failing_log_does_not_fail_the_turn() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let handler = HandleTurnHandler::new(
        store,
        Arc::new(MockExecutionGateway::new().with_result(ToolResult::success("Started"))),
        Arc::new(FailingConversationLog),
    );
    let user_id = UserId::new("nina").unwrap();

    for message in ["start i-0abc123", "confirm"] {
        let result = handler
            .handle(HandleTurnCommand {
                user_id: user_id.clone(),
                message: message.to_string(),
            })
            .await;
        assert!(result.is_ok());
    }
}

// =============================================================================
// Property tests
// =============================================================================

fn confirmation_token() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["confirm", "yes", "y", "cancel", "no", "n"]),
        prop::collection::vec(any::<bool>(), 7),
        " {0,3}",
    )
        .prop_map(|(word, upper, pad)| {
            let cased: String = word
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            format!("{}{}{}", pad, cased, pad)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn confirmation_tokens_with_nothing_pending_never_call_gateway(token in confirmation_token()) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let h = Harness::new(MockExecutionGateway::new());

        let reply = runtime.block_on(h.say("olga", &token));

        prop_assert_eq!(reply, "❌ No pending actions to confirm.");
        prop_assert_eq!(h.gateway.call_count(), 0);
    }
}
