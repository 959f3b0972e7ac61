use serde::{Deserialize, Serialize};

/// Summarize form submission
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    /// Text to summarize
    #[serde(default)]
    pub user_text: String,

    /// Length tier: "1" (short), "2" (medium), "3" (long)
    #[serde(default = "default_length")]
    pub length: String,

    /// Format mode: "paragraph", "bullets" or "takeaways"
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_length() -> String {
    "2".to_string()
}

fn default_mode() -> String {
    "paragraph".to_string()
}

/// Live word count request
#[derive(Debug, Default, Deserialize)]
pub struct WordCountRequest {
    #[serde(default)]
    pub text: String,
}

/// Live word count response
#[derive(Debug, Serialize)]
pub struct WordCountResponse {
    pub words: usize,
    pub characters: usize,
    pub sentences: usize,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: String,
    pub model: String,
    pub credential_configured: bool,
}
