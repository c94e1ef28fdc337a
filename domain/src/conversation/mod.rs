//! Conversation domain.
//!
//! - [`entities::Turn`] - one role-tagged message
//! - [`entities::Conversation`] - the append-only, in-memory turn log
//! - [`command::ChatCommand`] - classification of a raw input line

pub mod command;
pub mod entities;
