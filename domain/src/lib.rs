//! Domain layer for duo-chat
//!
//! This crate contains the core entities and value objects of the
//! two-stage chat pipeline. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Generator**: drafts an answer to the user's input
//! - **Evaluator**: reviews the draft and returns an improved answer
//! - **Conversation**: in-memory, append-only log of user and assistant turns

pub mod conversation;
pub mod core;
pub mod pipeline;
pub mod prompt;

// Re-export commonly used types
pub use conversation::{
    command::ChatCommand,
    entities::{Conversation, Role, Turn},
};
pub use core::{credentials::Credentials, error::DomainError, model::Model};
pub use pipeline::{
    stage::Stage,
    value_objects::{Fallback, Generation, TurnOutcome},
};
pub use prompt::{GENERATOR_APOLOGY, MALFORMED_RESPONSE_SENTINEL, PromptTemplate};
