use async_trait::async_trait;
use reqwest::Client;
use textbrief_common::{ProviderKind, ProviderSettings, Result};
use tracing::debug;

use crate::client::{build_http_client, map_transport_error, parse_body, read_success_body, require_api_key};
use crate::llm_trait::SummaryProvider;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

/// OpenRouter chat completions client
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    settings: ProviderSettings,
    client: Client,
}

impl OpenRouterClient {
    /// Create new OpenRouter client
    pub fn new(settings: ProviderSettings) -> Result<Self> {
        let client = build_http_client(&settings)?;
        Ok(Self { settings, client })
    }
}

#[async_trait]
impl SummaryProvider for OpenRouterClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenRouter
    }

    fn model(&self) -> &str {
        &self.settings.model
    }

    fn has_credential(&self) -> bool {
        self.settings.has_api_key()
    }

    async fn try_summarize(&self, prompt: &str) -> Result<String> {
        let api_key = require_api_key(&self.settings)?;
        let url = format!("{}/chat/completions", self.settings.base_url);

        let request = ChatCompletionRequest::new(
            &self.settings.model,
            prompt,
            self.settings.temperature,
            self.settings.max_output_tokens,
        );

        debug!(
            "Sending chat completion request - Model: {}, Prompt length: {}",
            self.settings.model,
            prompt.len()
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.settings.app_referer)
            .header("X-Title", &self.settings.app_title)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let body = read_success_body(response).await?;
        parse_body::<ChatCompletionResponse>(&body)?.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_client(base_url: &str, api_key: Option<&str>) -> OpenRouterClient {
        OpenRouterClient::new(ProviderSettings {
            kind: ProviderKind::OpenRouter,
            api_key: api_key.map(str::to_string),
            model: "openai/gpt-4o-mini".to_string(),
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(5),
            temperature: 0.7,
            max_output_tokens: 2048,
            app_referer: "http://localhost:5000".to_string(),
            app_title: "TextBrief".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_summarize_success_sends_identifying_headers() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer or-key"))
            .and(header("HTTP-Referer", "http://localhost:5000"))
            .and(header("X-Title", "TextBrief"))
            .and(body_partial_json(serde_json::json!({
                "model": "openai/gpt-4o-mini",
                "messages": [{ "role": "user", "content": "the prompt" }],
                "max_tokens": 2048
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "gen-1",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": "1. First takeaway" },
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = make_client(&server.uri(), Some("or-key"))
            .summarize("the prompt")
            .await;

        assert!(result.succeeded);
        assert_eq!(result.text, "1. First takeaway");
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = make_client(&server.uri(), None).summarize("the prompt").await;

        assert!(!result.succeeded);
        assert!(result
            .error_message
            .unwrap()
            .contains("OPENROUTER_API_KEY"));

        server.verify().await;
    }

    #[tokio::test]
    async fn test_provider_error_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": { "message": "No auth credentials found", "code": 401 }
            })))
            .mount(&server)
            .await;

        let result = make_client(&server.uri(), Some("or-key"))
            .summarize("the prompt")
            .await;

        assert_eq!(
            result.error_message.as_deref(),
            Some("API Error (HTTP 401): No auth credentials found")
        );
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = make_client(&server.uri(), Some("or-key"))
            .summarize("the prompt")
            .await;

        assert!(!result.succeeded);
        assert!(result
            .error_message
            .unwrap()
            .starts_with("Unexpected API response format"));
    }

    #[tokio::test]
    async fn test_empty_choices_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let result = make_client(&server.uri(), Some("or-key"))
            .summarize("the prompt")
            .await;

        assert_eq!(
            result.error_message.as_deref(),
            Some("Unexpected API response format: missing 'choices[0]'")
        );
    }
}
