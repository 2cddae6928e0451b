use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tasklift_core::{ExtractionError, ExtractionResult, TaskExtractor};
use tracing::{debug, info, warn};

use crate::prompt::build_prompt;
use crate::response::{GenerateContentResponse, parse_extraction};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote extractor backed by the Gemini `generateContent` endpoint.
///
/// One request per extraction, no retries: falling back is the caller's call.
pub struct GeminiExtractor {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiExtractor {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        info!("Creating GeminiExtractor");
        Self {
            client: build_client(DEFAULT_TIMEOUT),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Bound on the whole request, connect to last byte.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Send one request and return the candidate text.
    async fn try_send(&self, request: &serde_json::Value) -> Result<String, ExtractionError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ExtractionError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::NetworkFailure(format!(
                "service returned HTTP {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExtractionError::NetworkFailure(e.to_string()))?;
        let envelope: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| ExtractionError::MalformedResponse(e.to_string()))?;

        envelope.into_text()
    }
}

fn build_client(timeout: Duration) -> Client {
    Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
        warn!("Failed to build HTTP client with timeout: {e}. Using defaults");
        Client::new()
    })
}

#[async_trait]
impl TaskExtractor for GeminiExtractor {
    async fn extract(&self, text: &str) -> Result<ExtractionResult, ExtractionError> {
        if self.api_key.trim().is_empty() {
            return Err(ExtractionError::ServiceUnavailable);
        }

        let request = json!({
            "contents": [{
                "parts": [{ "text": build_prompt(text) }]
            }],
            "generationConfig": { "temperature": 0.0 },
        });

        info!("Sending request to Gemini API: model={}", self.model);
        let generated = self.try_send(&request).await?;
        debug!("Gemini returned: {generated}");

        parse_extraction(&generated)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_model() {
        let extractor = GeminiExtractor::new("key".to_string())
            .with_base_url("http://localhost:9999/v1beta/".to_string())
            .with_model("gemini-1.5-flash".to_string());
        assert_eq!(
            extractor.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_key_is_service_unavailable() {
        let extractor = GeminiExtractor::new("  ".to_string())
            .with_base_url("http://127.0.0.1:9".to_string());
        assert_eq!(
            extractor.extract("Meeting at 9pm").await,
            Err(ExtractionError::ServiceUnavailable)
        );
    }
}
