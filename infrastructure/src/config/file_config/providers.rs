//! Provider configuration from TOML (`[generator]` and `[evaluator]` sections)

use crate::providers::gemini::DEFAULT_GEMINI_BASE_URL;
use crate::providers::together::DEFAULT_TOGETHER_URL;
use duo_domain::Model;
use serde::{Deserialize, Serialize};

/// Generator (Gemini) settings
///
/// ```toml
/// [generator]
/// model = "gemini-2.0-flash"
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    /// Model identifier (default: gemini-2.0-pro-exp-02-05)
    pub model: Option<String>,
    /// API root; the model path segment is appended to it
    pub base_url: String,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            model: None,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

impl FileGeneratorConfig {
    /// Configured model, or the generator default
    pub fn parse_model(&self) -> Model {
        parse_model_or(self.model.as_deref(), Model::default_generator())
    }
}

/// Evaluator (Together.ai) settings
///
/// ```toml
/// [evaluator]
/// model = "deepseek-ai/DeepSeek-V3"
/// url = "https://api.together.xyz/v1/chat/completions"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEvaluatorConfig {
    /// Model identifier (default: deepseek-ai/DeepSeek-R1)
    pub model: Option<String>,
    /// Full chat completions URL
    pub url: String,
}

impl Default for FileEvaluatorConfig {
    fn default() -> Self {
        Self {
            model: None,
            url: DEFAULT_TOGETHER_URL.to_string(),
        }
    }
}

impl FileEvaluatorConfig {
    /// Configured model, or the evaluator default
    pub fn parse_model(&self) -> Model {
        parse_model_or(self.model.as_deref(), Model::default_evaluator())
    }
}

fn parse_model_or(value: Option<&str>, default: Model) -> Model {
    match value {
        Some(s) if !s.trim().is_empty() => Model::from(s.trim()),
        _ => default,
    }
}
