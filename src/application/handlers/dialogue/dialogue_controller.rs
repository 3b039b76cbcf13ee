//! DialogueController - decides what a single user message means in context.
//!
//! Priority, first match wins:
//!
//! 1. Confirmation token (`confirm`/`yes`/`y`, `cancel`/`no`/`n`)
//! 2. Mode token (`easy`, `customize`)
//! 3. Wizard answer while a creation mode is active
//! 4. Classified intent
//!
//! Every failure is rendered in-band; `handle_turn` always returns a reply.

use std::sync::Arc;

use crate::domain::dialogue::{
    easy_defaults, prompts, DialogueError, PendingKind, Session, Wizard,
};
use crate::domain::execution::{QueryFocus, ToolRequest, ToolResult};
use crate::domain::formatter::{creation_reply, next_step_guidance};
use crate::domain::foundation::UserId;
use crate::domain::intent::{classify, ConfirmationToken, Intent};
use crate::domain::resource::{CreationMode, ResourceType};
use crate::ports::{ConversationLog, ExecutionGateway};

pub struct DialogueController {
    gateway: Arc<dyn ExecutionGateway>,
    log: Arc<dyn ConversationLog>,
}

impl DialogueController {
    pub fn new(gateway: Arc<dyn ExecutionGateway>, log: Arc<dyn ConversationLog>) -> Self {
        Self { gateway, log }
    }

    /// Handles one turn, mutating `session` in place and returning the reply.
    pub async fn handle_turn(&self, session: &mut Session, message: &str) -> String {
        match self.dispatch(session, message).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::debug!(
                    user_id = %session.user_id(),
                    code = %err.code(),
                    "Turn ended with error: {}",
                    err
                );
                err.to_reply()
            }
        }
    }

    async fn dispatch(&self, session: &mut Session, message: &str) -> Result<String, DialogueError> {
        if let Some(token) = ConfirmationToken::from_token(message) {
            return self.handle_confirmation(session, token).await;
        }

        if let Some(mode) = CreationMode::from_token(message) {
            return self.handle_mode_selection(session, mode);
        }

        if session.mode().is_some() {
            return self.handle_wizard_answer(session, message).await;
        }

        let intent = classify(message);
        tracing::info!(
            user_id = %session.user_id(),
            intent = intent.kind().as_str(),
            "Classified message"
        );
        self.handle_intent(session, intent).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pending confirmation
    // ─────────────────────────────────────────────────────────────────────────

    async fn handle_confirmation(
        &self,
        session: &mut Session,
        token: ConfirmationToken,
    ) -> Result<String, DialogueError> {
        let pending = session
            .pending_confirmation()
            .cloned()
            .ok_or(DialogueError::NoPendingState(PendingKind::Confirmation))?;

        match token {
            ConfirmationToken::Cancel => {
                session.take_confirmation()?;
                Ok(prompts::ACTION_CANCELLED.to_string())
            }
            ConfirmationToken::Confirm => {
                let request = ToolRequest::Manage(pending);
                // A transport error leaves the confirmation pending for a retry.
                let result = self.invoke(session.user_id(), &request).await?;
                session.take_confirmation()?;
                if result.success {
                    Ok(prompts::action_executed(result.message.as_deref()))
                } else {
                    Err(DialogueError::execution_failure(
                        request.describe(),
                        result.error_text(),
                    ))
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Creation wizard
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_mode_selection(
        &self,
        session: &mut Session,
        mode: CreationMode,
    ) -> Result<String, DialogueError> {
        let resource_type = session
            .pending_creation()
            .map(|p| p.resource_type)
            .ok_or(DialogueError::NoPendingState(PendingKind::Creation))?;

        let Some(wizard) = Wizard::for_resource(resource_type, mode) else {
            session.abandon_creation()?;
            return Err(DialogueError::UnsupportedResourceType(resource_type));
        };

        session.select_mode(mode)?;
        tracing::info!(
            user_id = %session.user_id(),
            resource_type = %resource_type,
            mode = %mode,
            "Creation wizard started"
        );
        Ok(wizard.opening_prompt())
    }

    async fn handle_wizard_answer(
        &self,
        session: &mut Session,
        message: &str,
    ) -> Result<String, DialogueError> {
        let (Some(mode), Some(resource_type)) = (session.mode(), session.resource_type()) else {
            session.reset();
            return Err(DialogueError::InvalidTransition(
                "creation mode set without a resource type".to_string(),
            ));
        };
        let Some(wizard) = Wizard::for_resource(resource_type, mode) else {
            session.reset();
            return Err(DialogueError::UnsupportedResourceType(resource_type));
        };

        let step = session.wizard_step().unwrap_or(1);
        if let Some(field) = wizard.field_at(step) {
            session.record_answer(field.name, Wizard::normalize_answer(field, message))?;
        }

        if !wizard.is_complete(session.collected_config()) {
            let next = session.wizard_step().unwrap_or(1);
            if let Some(question) = wizard.question_for_step(next) {
                return Ok(question);
            }
        }

        self.execute_creation(session, resource_type, mode).await
    }

    async fn execute_creation(
        &self,
        session: &mut Session,
        resource_type: ResourceType,
        mode: CreationMode,
    ) -> Result<String, DialogueError> {
        let config = match mode {
            CreationMode::Easy => easy_defaults(resource_type, session.collected_config()),
            CreationMode::Customize => session.collected_config().clone(),
        };
        let request = ToolRequest::Create {
            resource_type,
            mode,
            config: config.clone(),
        };

        let outcome = self.invoke(session.user_id(), &request).await;
        // The terminal step resets whether or not the call succeeded.
        session.reset();

        let result = outcome?;
        if result.success {
            Ok(creation_reply(resource_type, &result, &config))
        } else {
            Err(DialogueError::execution_failure(
                request.describe(),
                result.error_text(),
            ))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Classified intents
    // ─────────────────────────────────────────────────────────────────────────

    async fn handle_intent(
        &self,
        session: &mut Session,
        intent: Intent,
    ) -> Result<String, DialogueError> {
        match intent {
            Intent::CreateResource {
                resource_type,
                original_message,
            } => {
                session.begin_creation(resource_type, original_message)?;
                Ok(prompts::mode_choice(resource_type))
            }
            Intent::ManageResource {
                action,
                target,
                original_message,
            } => {
                let reply = prompts::confirmation_request(action, &target);
                session.request_confirmation(action, target, original_message)?;
                Ok(reply)
            }
            Intent::NextStepAction {
                action_type,
                original_message,
            } => Ok(next_step_guidance(action_type, &original_message)),
            Intent::CostOptimization { original_message } => {
                self.query(session.user_id(), original_message, Some(QueryFocus::Cost))
                    .await
            }
            Intent::SecurityAction { original_message } => {
                self.query(session.user_id(), original_message, Some(QueryFocus::Security))
                    .await
            }
            Intent::QueryResources { original_message } => {
                self.query(session.user_id(), original_message, None).await
            }
        }
    }

    async fn query(
        &self,
        user_id: &UserId,
        message: String,
        focus: Option<QueryFocus>,
    ) -> Result<String, DialogueError> {
        let request = ToolRequest::query(message, focus);
        let result = self.invoke(user_id, &request).await?;

        if !result.success && result.error.is_some() {
            return Err(DialogueError::execution_failure(
                request.describe(),
                result.error_text(),
            ));
        }
        Ok(result
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| prompts::NO_RESULTS.to_string()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Gateway + log
    // ─────────────────────────────────────────────────────────────────────────

    /// Invokes the gateway and records the outcome in the conversation log.
    async fn invoke(
        &self,
        user_id: &UserId,
        request: &ToolRequest,
    ) -> Result<ToolResult, DialogueError> {
        let tool = request.tool_name();
        let outcome = self.gateway.invoke(request).await;

        let summary = match &outcome {
            Ok(result) if result.success => format!("{}: succeeded", tool),
            Ok(result) => format!("{}: failed: {}", tool, result.error_text()),
            Err(err) => format!("{}: gateway error: {}", tool, err),
        };
        self.record(user_id, &summary).await;

        outcome.map_err(|err| {
            tracing::warn!(
                user_id = %user_id,
                tool = %tool,
                retryable = err.is_retryable(),
                "Gateway call failed: {}",
                err
            );
            DialogueError::execution_failure(request.describe(), err.to_string())
        })
    }

    async fn record(&self, user_id: &UserId, text: &str) {
        if let Err(e) = self.log.append(user_id, text).await {
            tracing::warn!(user_id = %user_id, "Failed to append conversation log: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::conversation_log::InMemoryConversationLog;
    use crate::adapters::gateway::{MockError, MockExecutionGateway};
    use crate::domain::dialogue::DialogueStage;
    use crate::domain::intent::ManagementAction;

    fn setup(gateway: MockExecutionGateway) -> (DialogueController, InMemoryConversationLog) {
        let log = InMemoryConversationLog::new();
        let controller = DialogueController::new(Arc::new(gateway), Arc::new(log.clone()));
        (controller, log)
    }

    fn session() -> Session {
        Session::new(UserId::new("alice").unwrap())
    }

    mod tokens {
        use super::*;

        #[tokio::test]
        async fn confirm_without_pending_is_rejected() {
            let gateway = MockExecutionGateway::new();
            let (controller, _) = setup(gateway.clone());
            let mut s = session();
            let before = s.clone();

            let reply = controller.handle_turn(&mut s, "yes").await;

            assert_eq!(reply, "❌ No pending actions to confirm.");
            assert_eq!(s, before);
            assert_eq!(gateway.call_count(), 0);
        }

        #[tokio::test]
        async fn mode_without_pending_is_rejected() {
            let (controller, _) = setup(MockExecutionGateway::new());
            let mut s = session();
            let before = s.clone();

            let reply = controller.handle_turn(&mut s, "Easy").await;

            assert_eq!(reply, "❌ No pending resource creation found.");
            assert_eq!(s, before);
        }

        #[tokio::test]
        async fn cancel_clears_without_calling_gateway() {
            let gateway = MockExecutionGateway::new();
            let (controller, _) = setup(gateway.clone());
            let mut s = session();
            controller.handle_turn(&mut s, "stop instance i-0abc123").await;

            let reply = controller.handle_turn(&mut s, "no").await;

            assert_eq!(reply, "❌ Action cancelled.");
            assert!(s.pending_confirmation().is_none());
            assert_eq!(gateway.call_count(), 0);
        }
    }

    mod management {
        use super::*;

        #[tokio::test]
        async fn confirmed_action_calls_gateway_once() {
            let gateway = MockExecutionGateway::new()
                .with_result(ToolResult::success("Instance stopping"));
            let (controller, log) = setup(gateway.clone());
            let mut s = session();

            let prompt = controller.handle_turn(&mut s, "stop instance i-0abc123").await;
            assert!(prompt.contains("stop EC2 i-0abc123"));
            assert_eq!(s.pending_confirmation().unwrap().action, ManagementAction::Stop);
            assert_eq!(gateway.call_count(), 0);

            let reply = controller.handle_turn(&mut s, "confirm").await;

            assert_eq!(reply, "✅ Action executed: Instance stopping");
            assert_eq!(gateway.call_count(), 1);
            assert_eq!(gateway.last_call().unwrap().tool_name(), "stop");
            assert!(s.pending_confirmation().is_none());
            assert_eq!(log.entries().await.len(), 1);
        }

        #[tokio::test]
        async fn transport_failure_keeps_confirmation() {
            let gateway = MockExecutionGateway::new().with_error(MockError::Network {
                message: "connection reset".into(),
            });
            let (controller, _) = setup(gateway);
            let mut s = session();
            controller.handle_turn(&mut s, "delete bucket").await;

            let reply = controller.handle_turn(&mut s, "y").await;

            assert!(reply.starts_with("❌ Failed to delete"));
            assert!(reply.contains("connection reset"));
            assert_eq!(s.stage(), DialogueStage::AwaitingConfirmation);
        }

        #[tokio::test]
        async fn reported_failure_clears_confirmation() {
            let gateway =
                MockExecutionGateway::new().with_result(ToolResult::failure("AccessDenied"));
            let (controller, _) = setup(gateway);
            let mut s = session();
            controller.handle_turn(&mut s, "restart i-0abc123").await;

            let reply = controller.handle_turn(&mut s, "confirm").await;

            assert_eq!(reply, "❌ Failed to restart i-0abc123: AccessDenied");
            assert!(s.pending_confirmation().is_none());
        }
    }

    mod creation {
        use super::*;

        #[tokio::test]
        async fn easy_flow_merges_defaults_and_resets() {
            let gateway = MockExecutionGateway::new().with_result(
                ToolResult::success("Launched").with_field("instance_id", "i-0new"),
            );
            let (controller, _) = setup(gateway.clone());
            let mut s = session();

            let choice = controller.handle_turn(&mut s, "create ec2 instance").await;
            assert!(choice.contains("EASY MODE") && choice.contains("CUSTOMIZE MODE"));

            let question = controller.handle_turn(&mut s, "easy").await;
            assert!(question.contains("web_server"));

            let summary = controller.handle_turn(&mut s, "web server").await;
            assert!(summary.contains("EC2 CREATED SUCCESSFULLY"));
            assert!(summary.contains("i-0new"));
            assert!(summary.contains("NEXT STEPS"));
            assert!(s.is_empty());

            match gateway.last_call().unwrap() {
                ToolRequest::Create { config, .. } => {
                    assert_eq!(config.get("purpose").unwrap(), "web_server");
                    assert_eq!(config.get("instance_type").unwrap(), "t3.medium");
                }
                other => panic!("unexpected request {:?}", other),
            }
        }

        #[tokio::test]
        async fn unsupported_resource_clears_pending_creation() {
            let gateway = MockExecutionGateway::new();
            let (controller, _) = setup(gateway.clone());
            let mut s = session();
            controller.handle_turn(&mut s, "create vpc").await;

            let reply = controller.handle_turn(&mut s, "customize").await;

            assert!(reply.starts_with("❌ VPC creation isn't supported"));
            assert!(s.is_empty());
            assert_eq!(gateway.call_count(), 0);
        }

        #[tokio::test]
        async fn gateway_failure_at_last_step_still_resets() {
            let gateway = MockExecutionGateway::new().with_error(MockError::Unavailable {
                message: "down".into(),
            });
            let (controller, _) = setup(gateway);
            let mut s = session();
            controller.handle_turn(&mut s, "create s3 bucket").await;
            controller.handle_turn(&mut s, "easy").await;

            let reply = controller.handle_turn(&mut s, "logs").await;

            assert!(reply.starts_with("❌ Failed to create s3"));
            assert!(s.is_empty());
        }
    }

    mod queries {
        use super::*;

        #[tokio::test]
        async fn query_reply_is_result_message() {
            let gateway = MockExecutionGateway::new().with_result(ToolResult::success("3 buckets"));
            let (controller, _) = setup(gateway);
            let mut s = session();

            assert_eq!(controller.handle_turn(&mut s, "list my buckets").await, "3 buckets");
        }

        #[tokio::test]
        async fn missing_message_means_no_results() {
            let gateway = MockExecutionGateway::new().with_result(ToolResult {
                success: true,
                ..Default::default()
            });
            let (controller, _) = setup(gateway);
            let mut s = session();

            assert_eq!(
                controller.handle_turn(&mut s, "list my ec2 instances").await,
                "No results found."
            );
        }

        #[tokio::test]
        async fn cost_question_sets_focus() {
            let gateway = MockExecutionGateway::new();
            let (controller, _) = setup(gateway.clone());
            let mut s = session();

            controller.handle_turn(&mut s, "how can I save money?").await;

            let params = gateway.last_call().unwrap().parameters();
            assert_eq!(params["focus"], "cost");
        }

        #[tokio::test]
        async fn next_step_does_not_touch_session_or_gateway() {
            let gateway = MockExecutionGateway::new();
            let (controller, _) = setup(gateway.clone());
            let mut s = session();
            let before = s.clone();

            let reply = controller.handle_turn(&mut s, "show me how to ssh in").await;

            assert!(reply.contains("SSH Connection Guide"));
            assert_eq!(s, before);
            assert_eq!(gateway.call_count(), 0);
        }
    }
}
