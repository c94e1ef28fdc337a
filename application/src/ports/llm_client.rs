//! LLM client ports
//!
//! Defines the two outbound calls the pipeline makes: one to the generator
//! and one to the evaluator.

use async_trait::async_trait;
use duo_domain::{Generation, Model};
use thiserror::Error;

/// Errors that can occur during a single LLM call
///
/// Every variant is fatal for the call and is absorbed by the turn
/// orchestrator; none of them ends the chat session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Non-success HTTP status, with the raw response body
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Success status but the body lacked the expected field
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client for the generator stage
///
/// A success whose body has an unexpected shape is not an error: it comes
/// back as [`Generation::MalformedShape`].
#[async_trait]
pub trait GeneratorClient: Send + Sync {
    /// Model this client generates with
    fn model(&self) -> &Model;

    /// Send one prompt and return the drafted text
    async fn generate(&self, prompt: &str) -> Result<Generation, ClientError>;
}

/// Client for the evaluator stage
///
/// Unlike the generator, a missing answer field is reported as
/// [`ClientError::MalformedResponse`].
#[async_trait]
pub trait EvaluatorClient: Send + Sync {
    /// Model this client evaluates with
    fn model(&self) -> &Model;

    /// Send the review prompt and return the improved text
    async fn evaluate(&self, prompt: &str) -> Result<String, ClientError>;
}
