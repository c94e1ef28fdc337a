//! Presentation layer for duo-chat
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, credential prompts and the interactive chat loop.

pub mod chat;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use credentials::{InteractiveCredentialSource, SecretPrompt, TerminalPrompt};
pub use output::{console::ConsoleFormatter, markdown::MarkdownRenderer};
pub use progress::reporter::ProgressReporter;
