//! Credentials value object

use crate::core::error::DomainError;

/// The two API keys the pipeline needs (Value Object)
///
/// Supplied once at startup and moved into the HTTP adapters. The keys are
/// never part of the conversation and never show up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    generator_key: String,
    evaluator_key: String,
}

impl Credentials {
    /// Create credentials, rejecting empty or whitespace-only keys
    pub fn new(
        generator_key: impl Into<String>,
        evaluator_key: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let generator_key = generator_key.into();
        let evaluator_key = evaluator_key.into();

        if generator_key.trim().is_empty() {
            return Err(DomainError::MissingCredential("generator".to_string()));
        }
        if evaluator_key.trim().is_empty() {
            return Err(DomainError::MissingCredential("evaluator".to_string()));
        }

        Ok(Self {
            generator_key,
            evaluator_key,
        })
    }

    pub fn generator_key(&self) -> &str {
        &self.generator_key
    }

    pub fn evaluator_key(&self) -> &str {
        &self.evaluator_key
    }

    /// Split into `(generator_key, evaluator_key)`
    pub fn into_parts(self) -> (String, String) {
        (self.generator_key, self.evaluator_key)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("generator_key", &"<redacted>")
            .field("evaluator_key", &"<redacted>")
            .finish()
    }
}
