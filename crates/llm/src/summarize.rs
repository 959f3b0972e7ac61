use std::sync::Arc;
use tracing::info;

use crate::llm_trait::SummaryProvider;
use crate::prompts::build_prompt;
use crate::types::{SummaryRequest, SummaryResult};

/// Builds the prompt for a request and hands it to the active provider
#[derive(Clone)]
pub struct Summarizer {
    provider: Arc<dyn SummaryProvider>,
}

impl Summarizer {
    /// Create new summarizer
    pub fn new(provider: Arc<dyn SummaryProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn SummaryProvider {
        self.provider.as_ref()
    }

    /// Summarize a validated request; one provider call, no retries
    pub async fn summarize(&self, request: &SummaryRequest) -> SummaryResult {
        let prompt = build_prompt(
            request.raw_text(),
            request.length_tier(),
            request.format_mode(),
        );

        info!(
            "Starting summarization - Provider: {}, Length: {:?}, Format: {:?}, Text: {} chars",
            self.provider.kind(),
            request.length_tier(),
            request.format_mode(),
            request.raw_text().len()
        );

        self.provider.summarize(&prompt).await
    }
}
