//! Gemini adapter implementing [`GeneratorClient`]

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::providers::http::{read_success_body, transport_error};
use async_trait::async_trait;
use duo_application::{ClientError, GeneratorClient};
use duo_domain::{Generation, Model};
use tracing::{debug, info, warn};

/// Public Gemini API root
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Generator backed by Gemini's `generateContent` endpoint
///
/// The API key travels as the `key` query parameter, never in the body.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    model: Model,
    base_url: String,
}

impl GeminiGenerator {
    pub fn new(api_key: impl Into<String>, model: Model) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    /// Point the adapter at a different API root (proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl GeneratorClient for GeminiGenerator {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<Generation, ClientError> {
        debug!("Sending generateContent request to {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let body = read_success_body(response).await?;

        // A body that is not JSON at all is fatal; only a missing field degrades
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;
        let text = serde_json::from_value::<GenerateContentResponse>(value)
            .ok()
            .and_then(GenerateContentResponse::first_text);

        match text {
            Some(text) => {
                info!("Gemini {} returned {} chars", self.model, text.len());
                Ok(Generation::Text(text))
            }
            None => {
                warn!("Gemini {} response lacks candidates[0].content.parts[0].text", self.model);
                Ok(Generation::MalformedShape)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_includes_model_segment() {
        let generator = GeminiGenerator::new("k", Model::Gemini20Flash)
            .with_base_url("http://localhost:9999/v1beta/");
        assert_eq!(
            generator.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_default_base_url() {
        let generator = GeminiGenerator::new("k", Model::default_generator());
        assert!(generator.endpoint().starts_with(DEFAULT_GEMINI_BASE_URL));
        assert_eq!(generator.model(), &Model::Gemini20ProExp);
    }
}
