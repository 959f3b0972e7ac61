use crate::error::TextBriefError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Environment variable holding the Gemini API key
pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Environment variable holding the OpenRouter API key
pub const OPENROUTER_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Summarization backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini generateContent API
    Gemini,
    /// OpenRouter chat completions API
    OpenRouter,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenRouter => "openrouter",
        }
    }

    /// Name of the environment variable carrying this provider's key
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Self::Gemini => GOOGLE_API_KEY_ENV,
            Self::OpenRouter => OPENROUTER_API_KEY_ENV,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = TextBriefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "openrouter" => Ok(Self::OpenRouter),
            other => Err(TextBriefError::config(format!(
                "Unknown summary provider '{}' (expected 'gemini' or 'openrouter')",
                other
            ))),
        }
    }
}

/// Immutable settings handed to a summarization provider at startup
#[derive(Clone)]
pub struct ProviderSettings {
    pub kind: ProviderKind,

    /// API key; `None` when absent or blank
    pub api_key: Option<String>,

    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub temperature: f32,
    pub max_output_tokens: u32,

    /// Sent as `HTTP-Referer` by providers that identify the calling app
    pub app_referer: String,

    /// Sent as `X-Title` by providers that identify the calling app
    pub app_title: String,
}

impl ProviderSettings {
    /// True when a non-blank key is set
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }
}

// Keeps the key out of logs
impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("kind", &self.kind)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

/// TextBrief application configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Selected provider name ("gemini" or "openrouter")
    pub provider: String,

    /// Gemini API key
    #[serde(skip_serializing)]
    pub google_api_key: Option<String>,

    /// Gemini model name
    pub gemini_model: String,

    /// Gemini API base URL
    pub gemini_base_url: String,

    /// OpenRouter API key
    #[serde(skip_serializing)]
    pub openrouter_api_key: Option<String>,

    /// OpenRouter model name
    pub openrouter_model: String,

    /// OpenRouter API base URL
    pub openrouter_base_url: String,

    /// Referer header identifying this app to OpenRouter
    pub openrouter_referer: String,

    /// Title header identifying this app to OpenRouter
    pub openrouter_title: String,

    /// Maximum accepted input length in characters
    pub max_input_length: usize,

    /// Outbound request timeout in seconds
    pub request_timeout_secs: u64,

    /// Sampling temperature
    pub temperature: f32,

    /// Output token cap
    pub max_output_tokens: u32,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Static assets directory
    pub static_dir: PathBuf,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            google_api_key: None,
            gemini_model: "gemini-1.5-flash-latest".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            openrouter_api_key: None,
            openrouter_model: "openai/gpt-4o-mini".to_string(),
            openrouter_base_url: "https://openrouter.ai/api/v1".to_string(),
            openrouter_referer: "http://localhost:5000".to_string(),
            openrouter_title: "TextBrief".to_string(),
            max_input_length: 10_000,
            request_timeout_secs: 30,
            temperature: 0.7,
            max_output_tokens: 2048,
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            static_dir: PathBuf::from("./static"),
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("provider", &self.provider)
            .field("google_api_key", &self.google_api_key.as_ref().map(|_| "<redacted>"))
            .field("openrouter_api_key", &self.openrouter_api_key.as_ref().map(|_| "<redacted>"))
            .field("max_input_length", &self.max_input_length)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish_non_exhaustive()
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, TextBriefError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();

        let config = Self {
            provider: std::env::var("SUMMARY_PROVIDER").unwrap_or(defaults.provider),
            google_api_key: Self::get_env_key(GOOGLE_API_KEY_ENV),
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or(defaults.gemini_base_url),
            openrouter_api_key: Self::get_env_key(OPENROUTER_API_KEY_ENV),
            openrouter_model: std::env::var("OPENROUTER_MODEL")
                .unwrap_or(defaults.openrouter_model),
            openrouter_base_url: std::env::var("OPENROUTER_BASE_URL")
                .unwrap_or(defaults.openrouter_base_url),
            openrouter_referer: std::env::var("OPENROUTER_REFERER")
                .unwrap_or(defaults.openrouter_referer),
            openrouter_title: std::env::var("OPENROUTER_TITLE")
                .unwrap_or(defaults.openrouter_title),
            max_input_length: Self::get_env_parsed("MAX_INPUT_LENGTH")
                .unwrap_or(defaults.max_input_length),
            request_timeout_secs: Self::get_env_parsed("REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            temperature: Self::get_env_parsed("SUMMARY_TEMPERATURE")
                .unwrap_or(defaults.temperature),
            max_output_tokens: Self::get_env_parsed("SUMMARY_MAX_TOKENS")
                .unwrap_or(defaults.max_output_tokens),
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: Self::get_env_parsed("SERVER_PORT").unwrap_or(defaults.server_port),
            static_dir: Self::get_env_path("STATIC_DIR").unwrap_or(defaults.static_dir),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Get and parse a value from environment variable
    fn get_env_parsed<T: FromStr>(key: &str) -> Option<T> {
        std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
    }

    /// Get an API key; blank values count as unset
    fn get_env_key(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Parse the configured provider name
    pub fn provider_kind(&self) -> Result<ProviderKind, TextBriefError> {
        self.provider.parse()
    }

    /// Build the immutable settings for the selected provider
    pub fn provider_settings(&self) -> Result<ProviderSettings, TextBriefError> {
        let kind = self.provider_kind()?;
        let (api_key, model, base_url) = match kind {
            ProviderKind::Gemini => (
                self.google_api_key.clone(),
                self.gemini_model.clone(),
                self.gemini_base_url.clone(),
            ),
            ProviderKind::OpenRouter => (
                self.openrouter_api_key.clone(),
                self.openrouter_model.clone(),
                self.openrouter_base_url.clone(),
            ),
        };

        Ok(ProviderSettings {
            kind,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(self.request_timeout_secs),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            app_referer: self.openrouter_referer.clone(),
            app_title: self.openrouter_title.clone(),
        })
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), TextBriefError> {
        self.provider_kind()?;

        for (name, url) in [
            ("Gemini", &self.gemini_base_url),
            ("OpenRouter", &self.openrouter_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TextBriefError::config(format!(
                    "{} base URL must start with http:// or https://",
                    name
                )));
            }
        }

        if self.max_input_length == 0 {
            return Err(TextBriefError::config("Maximum input length cannot be 0"));
        }

        if self.request_timeout_secs == 0 {
            return Err(TextBriefError::config("Request timeout cannot be 0"));
        }

        // Validate port range
        if self.server_port == 0 {
            return Err(TextBriefError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
