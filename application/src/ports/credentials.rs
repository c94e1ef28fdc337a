//! Credential source port
//!
//! Resolves the two API keys before the chat loop starts. Flag parsing,
//! environment lookup and masked prompts all live behind this interface.

use duo_domain::{Credentials, DomainError};
use thiserror::Error;

/// Errors that can occur while resolving credentials
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("No {name} API key provided")]
    Missing { name: String },

    #[error("Failed to read API key: {0}")]
    Prompt(String),
}

impl From<DomainError> for CredentialError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::MissingCredential(name) => CredentialError::Missing { name },
            other => CredentialError::Prompt(other.to_string()),
        }
    }
}

/// Source of the generator and evaluator API keys
pub trait CredentialSource {
    /// Produce both keys, or fail if either cannot be obtained
    fn resolve(&self) -> Result<Credentials, CredentialError>;
}

/// Credentials known up front (tests, embedding)
pub struct StaticCredentials(pub Credentials);

impl CredentialSource for StaticCredentials {
    fn resolve(&self) -> Result<Credentials, CredentialError> {
        Ok(self.0.clone())
    }
}
