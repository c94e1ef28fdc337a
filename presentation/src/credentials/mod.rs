//! Interactive credential resolution

mod prompt;

pub use prompt::{InteractiveCredentialSource, SecretPrompt, TerminalPrompt};
