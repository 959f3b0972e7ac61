use async_trait::async_trait;
use reqwest::Client;
use textbrief_common::{ProviderKind, ProviderSettings, Result};
use tracing::debug;

use crate::client::{build_http_client, map_transport_error, parse_body, read_success_body, require_api_key};
use crate::llm_trait::SummaryProvider;
use crate::types::{GeminiRequest, GeminiResponse};

/// Google Gemini generateContent client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    settings: ProviderSettings,
    client: Client,
}

impl GeminiClient {
    /// Create new Gemini client
    pub fn new(settings: ProviderSettings) -> Result<Self> {
        let client = build_http_client(&settings)?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url, self.settings.model
        )
    }
}

#[async_trait]
impl SummaryProvider for GeminiClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn model(&self) -> &str {
        &self.settings.model
    }

    fn has_credential(&self) -> bool {
        self.settings.has_api_key()
    }

    async fn try_summarize(&self, prompt: &str) -> Result<String> {
        let api_key = require_api_key(&self.settings)?;

        let request = GeminiRequest::new(
            prompt,
            self.settings.temperature,
            self.settings.max_output_tokens,
        );

        debug!(
            "Sending generateContent request - Model: {}, Prompt length: {}",
            self.settings.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let body = read_success_body(response).await?;
        parse_body::<GeminiResponse>(&body)?.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/v1beta/models/gemini-test:generateContent";

    fn make_client(base_url: &str, api_key: Option<&str>, timeout: Duration) -> GeminiClient {
        GeminiClient::new(ProviderSettings {
            kind: ProviderKind::Gemini,
            api_key: api_key.map(str::to_string),
            model: "gemini-test".to_string(),
            base_url: base_url.to_string(),
            timeout,
            temperature: 0.7,
            max_output_tokens: 2048,
            app_referer: "http://localhost".to_string(),
            app_title: "TextBrief".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_summarize_success_returns_text_verbatim() {
        let server = MockServer::start().await;
        let text = "  A summary.\n\n- with bullets  \n";

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{ "parts": [{ "text": "the prompt" }] }],
                "generationConfig": { "maxOutputTokens": 2048 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": text }] },
                    "finishReason": "STOP"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server.uri(), Some("test-key"), Duration::from_secs(5));
        let result = client.summarize("the prompt").await;

        assert!(result.succeeded);
        assert_eq!(result.text, text);
        assert_eq!(result.error_message, None);
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = make_client(&server.uri(), None, Duration::from_secs(5));
        let result = client.summarize("the prompt").await;

        assert!(!result.succeeded);
        assert!(result.text.is_empty());
        let message = result.error_message.unwrap();
        assert!(message.contains("API key not configured"));
        assert!(message.contains("GOOGLE_API_KEY"));

        server.verify().await;
    }

    #[tokio::test]
    async fn test_blank_key_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = make_client(&server.uri(), Some("   "), Duration::from_secs(5));
        let result = client.summarize("the prompt").await;

        assert!(!result.succeeded);
        assert!(result
            .error_message
            .unwrap()
            .contains("API key not configured"));

        server.verify().await;
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(2))
                    .set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&server)
            .await;

        let client = make_client(&server.uri(), Some("test-key"), Duration::from_millis(200));
        let result = client.summarize("the prompt").await;

        assert!(!result.succeeded);
        assert_eq!(result.text, "");
        assert_eq!(
            result.error_message.as_deref(),
            Some("Request timed out. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_structured_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
            })))
            .mount(&server)
            .await;

        let client = make_client(&server.uri(), Some("bad-key"), Duration::from_secs(5));
        let result = client.summarize("the prompt").await;

        assert!(!result.succeeded);
        assert_eq!(
            result.error_message.as_deref(),
            Some("API Error (HTTP 400): API key not valid.")
        );
    }

    #[tokio::test]
    async fn test_unstructured_provider_error_uses_raw_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let client = make_client(&server.uri(), Some("test-key"), Duration::from_secs(5));
        let result = client.summarize("the prompt").await;

        assert_eq!(
            result.error_message.as_deref(),
            Some("API Error (HTTP 503): upstream unavailable")
        );
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&server)
            .await;

        let client = make_client(&server.uri(), Some("test-key"), Duration::from_secs(5));
        let result = client.summarize("the prompt").await;

        assert!(!result.succeeded);
        assert!(result.text.is_empty());
        let message = result.error_message.unwrap();
        assert!(message.starts_with("Unexpected API response format"));
        assert!(message.contains("candidates[0]"));
    }

    #[tokio::test]
    async fn test_connection_failure_is_reported() {
        // Nothing listens on the discard port
        let client = make_client("http://127.0.0.1:9", Some("test-key"), Duration::from_secs(5));
        let result = client.summarize("the prompt").await;

        assert!(!result.succeeded);
        let message = result.error_message.unwrap();
        assert!(message.starts_with("Request failed: "));
        assert!(!message.contains("test-key"));
    }
}
