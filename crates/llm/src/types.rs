use serde::{Deserialize, Serialize};
use textbrief_common::{count_characters, Result, TextBriefError};

/// Target summary length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthTier {
    /// Parse a form value ("1", "2", "3" or a tier name); anything else is Medium
    pub fn from_form_value(value: &str) -> Self {
        match value.trim() {
            "1" | "short" => Self::Short,
            "3" | "long" => Self::Long,
            _ => Self::Medium,
        }
    }

    /// Value the form posts for this tier
    pub fn form_value(&self) -> &'static str {
        match self {
            Self::Short => "1",
            Self::Medium => "2",
            Self::Long => "3",
        }
    }
}

/// Output shape of the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    #[default]
    Paragraph,
    Bullets,
    Takeaways,
}

impl FormatMode {
    /// Parse a form value; anything unrecognized is Paragraph
    pub fn from_form_value(value: &str) -> Self {
        match value.trim() {
            "bullets" => Self::Bullets,
            "takeaways" => Self::Takeaways,
            _ => Self::Paragraph,
        }
    }

    pub fn form_value(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Bullets => "bullets",
            Self::Takeaways => "takeaways",
        }
    }
}

/// A validated summarization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    raw_text: String,
    length_tier: LengthTier,
    format_mode: FormatMode,
}

impl SummaryRequest {
    /// Validate and build a request
    ///
    /// The text is trimmed, then must be non-empty and at most
    /// `max_chars` characters long.
    pub fn new(
        raw_text: &str,
        length_tier: LengthTier,
        format_mode: FormatMode,
        max_chars: usize,
    ) -> Result<Self> {
        let raw_text = raw_text.trim();

        if raw_text.is_empty() {
            return Err(TextBriefError::invalid_input(
                "Please enter some text to summarize.",
            ));
        }

        if count_characters(raw_text) > max_chars {
            return Err(Self::too_long(max_chars));
        }

        Ok(Self {
            raw_text: raw_text.to_string(),
            length_tier,
            format_mode,
        })
    }

    /// Rejection for text over `max_chars` characters
    pub fn too_long(max_chars: usize) -> TextBriefError {
        TextBriefError::invalid_input(format!(
            "Text is too long. Maximum {} characters allowed.",
            max_chars
        ))
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn length_tier(&self) -> LengthTier {
        self.length_tier
    }

    pub fn format_mode(&self) -> FormatMode {
        self.format_mode
    }
}

/// Normalized outcome of one summarization call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    pub succeeded: bool,

    /// Summary text; empty on failure
    pub text: String,

    pub error_message: Option<String>,
}

impl SummaryResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            text: text.into(),
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            text: String::new(),
            error_message: Some(message.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Gemini generateContent
// ---------------------------------------------------------------------------

/// Gemini generateContent request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    pub generation_config: GeminiGenerationConfig,
}

impl GeminiRequest {
    pub fn new(prompt: &str, temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature,
                max_output_tokens,
            },
        }
    }
}

/// Generation options
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Gemini generateContent response
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
}

impl GeminiResponse {
    /// Take `candidates[0].content.parts[0].text`
    pub fn into_text(self) -> Result<String> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| TextBriefError::malformed_response("missing 'candidates[0]'"))?;
        let content = candidate.content.ok_or_else(|| {
            TextBriefError::malformed_response("missing 'candidates[0].content'")
        })?;
        let part = content.parts.into_iter().next().ok_or_else(|| {
            TextBriefError::malformed_response("missing 'candidates[0].content.parts[0]'")
        })?;
        part.text.ok_or_else(|| {
            TextBriefError::malformed_response("missing 'candidates[0].content.parts[0].text'")
        })
    }
}

// ---------------------------------------------------------------------------
// OpenRouter chat completions
// ---------------------------------------------------------------------------

/// Chat completions request
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatCompletionRequest {
    pub fn new(model: &str, prompt: &str, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(prompt.to_string()),
            }],
            temperature,
            max_tokens,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub content: Option<String>,
}

/// Chat completions response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChatMessage>,
}

impl ChatCompletionResponse {
    /// Take `choices[0].message.content`
    pub fn into_text(self) -> Result<String> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TextBriefError::malformed_response("missing 'choices[0]'"))?;
        let message = choice.message.ok_or_else(|| {
            TextBriefError::malformed_response("missing 'choices[0].message'")
        })?;
        message.content.ok_or_else(|| {
            TextBriefError::malformed_response("missing 'choices[0].message.content'")
        })
    }
}
