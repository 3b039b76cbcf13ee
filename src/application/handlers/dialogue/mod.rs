//! Dialogue handlers - the conversational entry point.

mod dialogue_controller;
mod get_session;
mod handle_turn;

pub use dialogue_controller::DialogueController;
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use handle_turn::{HandleTurnCommand, HandleTurnError, HandleTurnHandler, HandleTurnResult};
