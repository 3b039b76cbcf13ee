//! Response formatter - turns gateway results into conversational replies.
//!
//! Pure functions only. Nothing here touches the session or the gateway.

mod guidance;
mod next_steps;
mod summary;

pub use guidance::next_step_guidance;
pub use next_steps::next_step_menu;
pub use summary::{creation_reply, creation_summary, OBSERVABILITY_FOOTER};
