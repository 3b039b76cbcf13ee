//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dialogue;

pub use dialogue::{
    DialogueController, GetSessionHandler, GetSessionQuery, HandleTurnCommand, HandleTurnError,
    HandleTurnHandler, HandleTurnResult,
};
