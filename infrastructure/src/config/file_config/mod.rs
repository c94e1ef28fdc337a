//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod providers;
mod repl;

pub use output::FileOutputConfig;
pub use providers::{FileEvaluatorConfig, FileGeneratorConfig};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{field}: model name cannot be empty")]
    EmptyModelName { field: String },

    #[error("{field}: invalid URL '{value}'")]
    InvalidUrl { field: String, value: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generator stage settings
    pub generator: FileGeneratorConfig,
    /// Evaluator stage settings
    pub evaluator: FileEvaluatorConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every issue found
    ///
    /// Issues are warnings: the models fall back to defaults and a bad URL
    /// only fails when a request is actually sent.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        for (field, model) in [
            ("generator.model", &self.generator.model),
            ("evaluator.model", &self.evaluator.model),
        ] {
            if let Some(name) = model {
                if name.trim().is_empty() {
                    issues.push(ConfigValidationError::EmptyModelName {
                        field: field.to_string(),
                    });
                }
            }
        }

        for (field, url) in [
            ("generator.base_url", &self.generator.base_url),
            ("evaluator.url", &self.evaluator.url),
        ] {
            if reqwest::Url::parse(url).is_err() {
                issues.push(ConfigValidationError::InvalidUrl {
                    field: field.to_string(),
                    value: url.clone(),
                });
            }
        }

        issues
    }
}
