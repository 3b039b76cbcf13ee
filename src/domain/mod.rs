//! Domain layer containing the conversational rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, timestamps, state machine)
//! - `resource` - Resource types, families and creation modes
//! - `intent` - Rule-based intent classifier and its result types
//! - `dialogue` - Session entity, creation wizard and fixed prompts
//! - `execution` - Tool requests and results exchanged with the gateway
//! - `formatter` - Creation summaries, next-step menus and guidance

pub mod dialogue;
pub mod execution;
pub mod formatter;
pub mod foundation;
pub mod intent;
pub mod resource;
