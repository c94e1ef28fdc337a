//! Together.ai adapter implementing [`EvaluatorClient`]

use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::providers::http::{read_success_body, transport_error};
use async_trait::async_trait;
use duo_application::{ClientError, EvaluatorClient};
use duo_domain::Model;
use tracing::{debug, info};

/// Together.ai chat completions endpoint
pub const DEFAULT_TOGETHER_URL: &str = "https://api.together.xyz/v1/chat/completions";

/// Evaluator backed by an OpenAI-style chat completions endpoint
///
/// Authenticates with `Authorization: Bearer <key>`.
pub struct TogetherEvaluator {
    client: reqwest::Client,
    api_key: String,
    model: Model,
    url: String,
}

impl TogetherEvaluator {
    pub fn new(api_key: impl Into<String>, model: Model) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model,
            url: DEFAULT_TOGETHER_URL.to_string(),
        }
    }

    /// Point the adapter at a different endpoint (proxies, tests)
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

#[async_trait]
impl EvaluatorClient for TogetherEvaluator {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn evaluate(&self, prompt: &str) -> Result<String, ClientError> {
        debug!("Sending chat completion request to {}", self.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&ChatCompletionRequest::single_user(self.model.as_str(), prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let body = read_success_body(response).await?;

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ClientError::MalformedResponse("empty choices".to_string()))?;

        info!("Together {} returned {} chars", self.model, content.len());
        Ok(content)
    }
}
