//! TextBrief LLM Integration
//!
//! Prompt construction and the Gemini / OpenRouter summarization clients

mod client;
mod gemini;
mod llm_trait;
mod openrouter;
mod prompts;
mod summarize;
mod types;

pub use client::build_provider;
pub use gemini::GeminiClient;
pub use llm_trait::SummaryProvider;
pub use openrouter::OpenRouterClient;
pub use prompts::{build_prompt, format_clause, length_clause, FAITHFULNESS_DIRECTIVE, SOURCE_DELIMITER};
pub use summarize::Summarizer;
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, FormatMode, GeminiRequest, GeminiResponse,
    LengthTier, SummaryRequest, SummaryResult,
};
