//! AWS Ops Agent - Conversational AWS Operations Assistant
//!
//! This crate turns free-form chat messages into AWS operations. Each turn is
//! classified into an intent, routed through a per-user dialogue state machine
//! (creation wizards, pending confirmations) and executed through an
//! execution gateway that invokes named tools.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
