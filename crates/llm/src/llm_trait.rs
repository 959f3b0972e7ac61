use async_trait::async_trait;
use textbrief_common::{ProviderKind, Result};
use tracing::{info, warn};

use crate::types::SummaryResult;

/// Common trait for summarization backends
///
/// Callers only see [`SummaryProvider::summarize`], which never fails:
/// every error is folded into a [`SummaryResult`].
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Backend identifier
    fn kind(&self) -> ProviderKind;

    /// Model name sent to the backend
    fn model(&self) -> &str;

    /// Whether a credential is configured
    fn has_credential(&self) -> bool;

    /// Single attempt, returning the extracted text or a classified error
    async fn try_summarize(&self, prompt: &str) -> Result<String>;

    /// Send the prompt and normalize the outcome
    async fn summarize(&self, prompt: &str) -> SummaryResult {
        match self.try_summarize(prompt).await {
            Ok(text) => {
                info!(
                    "Summary received - Provider: {}, Length: {} chars",
                    self.kind(),
                    text.len()
                );
                SummaryResult::success(text)
            }
            Err(e) => {
                warn!("Summarization failed - Provider: {}: {}", self.kind(), e);
                SummaryResult::failure(e.to_string())
            }
        }
    }
}
