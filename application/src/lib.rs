//! Application layer for duo-chat
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    credentials::{CredentialError, CredentialSource, StaticCredentials},
    llm_client::{ClientError, EvaluatorClient, GeneratorClient},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::chat_session::{ChatSession, SessionEvent, SessionState};
pub use use_cases::run_turn::RunTurnUseCase;
