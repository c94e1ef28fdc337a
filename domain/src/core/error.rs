//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Session already terminated")]
    SessionTerminated,
}

impl DomainError {
    /// Check if this error means the chat session is over
    pub fn is_terminated(&self) -> bool {
        matches!(self, DomainError::SessionTerminated)
    }
}
