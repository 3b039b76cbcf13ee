//! Dialogue domain - per-user conversation state and the creation wizard.
//!
//! # Module Organization
//!
//! - `session` - The `Session` entity and its derived `DialogueStage`
//! - `wizard` - Per-resource question sequences for Easy and Customize mode
//! - `defaults` - Easy-mode defaults table keyed by purpose
//! - `prompts` - Fixed system utterances
//! - `errors` - `DialogueError` and its user-visible rendering

mod defaults;
mod errors;
pub mod prompts;
mod session;
mod wizard;

pub use defaults::easy_defaults;
pub use errors::{DialogueError, PendingKind};
pub use session::{DialogueStage, PendingConfirmation, PendingCreation, Session};
pub use wizard::{Wizard, WizardField};
