//! Infrastructure layer for duo-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEvaluatorConfig, FileGeneratorConfig,
    FileOutputConfig, FileReplConfig,
};
pub use credentials::EnvCredentialSource;
pub use providers::{
    gemini::{DEFAULT_GEMINI_BASE_URL, GeminiGenerator},
    together::{DEFAULT_TOGETHER_URL, TogetherEvaluator},
};
