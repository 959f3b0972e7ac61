/// TextBrief error types
#[derive(Debug, thiserror::Error)]
pub enum TextBriefError {
    /// Configuration error (missing credential, bad setting)
    #[error("{0}")]
    Config(String),

    /// Invalid input (empty or over-length text)
    #[error("{0}")]
    InvalidInput(String),

    /// Provider did not answer within the configured timeout
    #[error("Request timed out. Please try again.")]
    Timeout,

    /// Provider answered with a non-success status
    #[error("API Error (HTTP {status}): {message}")]
    Provider { status: u16, message: String },

    /// Provider answered 2xx but the payload had an unexpected shape
    #[error("Unexpected API response format: {0}")]
    MalformedResponse(String),

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Network(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TextBriefError {
    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create provider error
    pub fn provider<S: Into<String>>(status: u16, msg: S) -> Self {
        Self::Provider {
            status,
            message: msg.into(),
        }
    }

    /// Create malformed response error
    pub fn malformed_response<S: Into<String>>(msg: S) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}
