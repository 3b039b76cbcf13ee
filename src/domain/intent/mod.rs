//! Intent classification.
//!
//! Maps a raw utterance onto one discrete [`Intent`] using ordered keyword
//! tables. Classification is pure and never fails: anything unmatched falls
//! through to [`Intent::QueryResources`].
//!
//! Confirmation and mode tokens are whole-message matches checked by the
//! dialogue controller before the classifier runs; they are exposed here as
//! [`ConfirmationToken`] and [`crate::domain::resource::CreationMode::from_token`].

mod classifier;
mod intent;
mod target;

pub use classifier::{
    classify, COST_KEYWORDS, CREATE_PATTERNS, MANAGE_PATTERNS, NEXT_STEP_PATTERNS,
    SECURITY_KEYWORDS,
};
pub use intent::{ConfirmationToken, Intent, IntentKind, ManagementAction, NextStepKind};
pub use target::ResourceTarget;
