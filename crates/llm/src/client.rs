//! HTTP plumbing shared by the provider backends

use reqwest::{Client, Response};
use std::sync::Arc;
use textbrief_common::{ProviderKind, ProviderSettings, Result, TextBriefError};
use tracing::info;

use crate::gemini::GeminiClient;
use crate::llm_trait::SummaryProvider;
use crate::openrouter::OpenRouterClient;

/// Create the HTTP client used for every call to a provider
pub(crate) fn build_http_client(settings: &ProviderSettings) -> Result<Client> {
    Client::builder()
        .timeout(settings.timeout)
        .build()
        .map_err(|e| TextBriefError::internal(format!("Failed to create HTTP client: {}", e)))
}

/// Build the backend selected by `settings.kind`
pub fn build_provider(settings: ProviderSettings) -> Result<Arc<dyn SummaryProvider>> {
    info!(
        "Summary provider: {} (model: {}, credential: {})",
        settings.kind,
        settings.model,
        if settings.has_api_key() { "set" } else { "missing" }
    );

    let provider: Arc<dyn SummaryProvider> = match settings.kind {
        ProviderKind::Gemini => Arc::new(GeminiClient::new(settings)?),
        ProviderKind::OpenRouter => Arc::new(OpenRouterClient::new(settings)?),
    };
    Ok(provider)
}

/// Credential for `settings`, or the configuration error when it is unset or blank
pub(crate) fn require_api_key(settings: &ProviderSettings) -> Result<&str> {
    settings
        .api_key
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            TextBriefError::config(format!(
                "API key not configured. Please add {} to your .env file.",
                settings.kind.api_key_env()
            ))
        })
}

/// Classify a reqwest failure; the URL is dropped since it may carry the key
pub(crate) fn map_transport_error(e: reqwest::Error) -> TextBriefError {
    if e.is_timeout() {
        TextBriefError::Timeout
    } else {
        TextBriefError::network(e.without_url().to_string())
    }
}

/// Read the status and body, turning non-success statuses into provider errors
pub(crate) async fn read_success_body(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await.map_err(map_transport_error)?;

    if !status.is_success() {
        return Err(TextBriefError::provider(
            status.as_u16(),
            provider_error_message(&body),
        ));
    }

    Ok(body)
}

/// `error.message` from a JSON error body, else the raw body
pub(crate) fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

/// Deserialize a 2xx body, reporting shape mismatches as malformed responses
pub(crate) fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| TextBriefError::malformed_response(format!("invalid JSON payload: {}", e)))
}
