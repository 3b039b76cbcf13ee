//! Session entity - one user's conversation memory.
//!
//! # Invariants
//!
//! - At most one of `pending_creation` and `pending_confirmation` is set
//! - `wizard_step` and `resource_type` are set iff `mode` is set
//! - A fresh or reset session has every optional field empty
//!
//! The stage is never stored; it is derived from which fields are set and
//! every mutator validates its move through [`DialogueStage`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::{DialogueError, PendingKind};
use crate::domain::foundation::{StateMachine, Timestamp, UserId};
use crate::domain::intent::{ManagementAction, ResourceTarget};
use crate::domain::resource::{CreationMode, ResourceType};

/// A creation request waiting for the user to choose a mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCreation {
    pub resource_type: ResourceType,
    pub original_message: String,
}

/// A management action waiting for confirm/cancel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingConfirmation {
    pub action: ManagementAction,
    #[serde(default)]
    pub target: ResourceTarget,
    pub original_message: String,
}

/// Where the conversation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStage {
    Idle,
    AwaitingMode,
    Collecting,
    AwaitingConfirmation,
}

impl StateMachine for DialogueStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialogueStage::*;
        match self {
            Idle => vec![AwaitingMode, AwaitingConfirmation],
            AwaitingMode => vec![AwaitingMode, AwaitingConfirmation, Collecting, Idle],
            Collecting => vec![Collecting, Idle],
            AwaitingConfirmation => vec![Idle, AwaitingMode, AwaitingConfirmation],
        }
    }
}

/// Per-user conversation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user_id: UserId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pending_creation: Option<PendingCreation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    mode: Option<CreationMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    resource_type: Option<ResourceType>,

    /// 1-based index of the question awaiting an answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wizard_step: Option<u32>,

    #[serde(default)]
    collected_config: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pending_confirmation: Option<PendingConfirmation>,

    updated_at: Timestamp,
}

impl Session {
    /// Creates the empty session for `user_id`.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            pending_creation: None,
            mode: None,
            resource_type: None,
            wizard_step: None,
            collected_config: BTreeMap::new(),
            pending_confirmation: None,
            updated_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn pending_creation(&self) -> Option<&PendingCreation> {
        self.pending_creation.as_ref()
    }

    pub fn mode(&self) -> Option<CreationMode> {
        self.mode
    }

    pub fn resource_type(&self) -> Option<ResourceType> {
        self.resource_type
    }

    pub fn wizard_step(&self) -> Option<u32> {
        self.wizard_step
    }

    pub fn collected_config(&self) -> &BTreeMap<String, String> {
        &self.collected_config
    }

    pub fn pending_confirmation(&self) -> Option<&PendingConfirmation> {
        self.pending_confirmation.as_ref()
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Derives the current stage from which fields are set.
    pub fn stage(&self) -> DialogueStage {
        if self.pending_confirmation.is_some() {
            DialogueStage::AwaitingConfirmation
        } else if self.pending_creation.is_some() {
            DialogueStage::AwaitingMode
        } else if self.mode.is_some() {
            DialogueStage::Collecting
        } else {
            DialogueStage::Idle
        }
    }

    /// True when the session has the shape of a freshly created one.
    pub fn is_empty(&self) -> bool {
        self.stage() == DialogueStage::Idle
            && self.resource_type.is_none()
            && self.wizard_step.is_none()
            && self.collected_config.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutators
    // ─────────────────────────────────────────────────────────────────────────

    /// Records a creation request and waits for a mode choice.
    ///
    /// Replaces any earlier pending creation or confirmation.
    pub fn begin_creation(
        &mut self,
        resource_type: ResourceType,
        original_message: impl Into<String>,
    ) -> Result<(), DialogueError> {
        self.stage().transition_to(DialogueStage::AwaitingMode)?;
        self.pending_confirmation = None;
        self.pending_creation = Some(PendingCreation {
            resource_type,
            original_message: original_message.into(),
        });
        self.touch();
        Ok(())
    }

    /// Consumes the pending creation and starts the wizard at step 1.
    ///
    /// # Errors
    ///
    /// - `NoPendingState(Creation)` if no creation is waiting
    pub fn select_mode(&mut self, mode: CreationMode) -> Result<ResourceType, DialogueError> {
        let resource_type = self
            .pending_creation
            .as_ref()
            .map(|p| p.resource_type)
            .ok_or(DialogueError::NoPendingState(PendingKind::Creation))?;
        self.stage().transition_to(DialogueStage::Collecting)?;

        self.pending_creation = None;
        self.mode = Some(mode);
        self.resource_type = Some(resource_type);
        self.wizard_step = Some(1);
        self.collected_config.clear();
        self.touch();
        Ok(resource_type)
    }

    /// Drops the pending creation without starting a wizard.
    pub fn abandon_creation(&mut self) -> Result<Option<PendingCreation>, DialogueError> {
        self.stage().transition_to(DialogueStage::Idle)?;
        let pending = self.pending_creation.take();
        self.touch();
        Ok(pending)
    }

    /// Stores the answer to the current question and advances one step.
    pub fn record_answer(
        &mut self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<u32, DialogueError> {
        self.stage().transition_to(DialogueStage::Collecting)?;
        self.collected_config.insert(field.into(), value.into());
        let next = self.wizard_step.unwrap_or(1) + 1;
        self.wizard_step = Some(next);
        self.touch();
        Ok(next)
    }

    /// Parks a management action until the user confirms or cancels.
    ///
    /// Replaces any earlier pending confirmation and drops a pending creation.
    pub fn request_confirmation(
        &mut self,
        action: ManagementAction,
        target: ResourceTarget,
        original_message: impl Into<String>,
    ) -> Result<(), DialogueError> {
        self.stage().transition_to(DialogueStage::AwaitingConfirmation)?;
        self.pending_creation = None;
        self.pending_confirmation = Some(PendingConfirmation {
            action,
            target,
            original_message: original_message.into(),
        });
        self.touch();
        Ok(())
    }

    /// Removes and returns the pending confirmation.
    pub fn take_confirmation(&mut self) -> Result<PendingConfirmation, DialogueError> {
        let pending = self
            .pending_confirmation
            .take()
            .ok_or(DialogueError::NoPendingState(PendingKind::Confirmation))?;
        self.touch();
        Ok(pending)
    }

    /// Returns the session to its empty shape.
    pub fn reset(&mut self) {
        self.pending_creation = None;
        self.mode = None;
        self.resource_type = None;
        self.wizard_step = None;
        self.collected_config.clear();
        self.pending_confirmation = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
