use std::sync::Arc;
use textbrief_common::{AppConfig, Result};
use textbrief_llm::{build_provider, SummaryProvider, Summarizer};

use crate::view::PageRenderer;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Prompt builder + active provider
    pub summarizer: Summarizer,

    /// HTML page renderer
    pub renderer: PageRenderer,
}

impl AppState {
    /// Create new application state with the provider named in `config`
    pub fn new(config: AppConfig) -> Result<Self> {
        let provider = build_provider(config.provider_settings()?)?;
        Self::with_provider(config, provider)
    }

    /// Create application state around an explicit provider
    pub fn with_provider(config: AppConfig, provider: Arc<dyn SummaryProvider>) -> Result<Self> {
        Ok(Self {
            config,
            summarizer: Summarizer::new(provider),
            renderer: PageRenderer::new()?,
        })
    }
}
