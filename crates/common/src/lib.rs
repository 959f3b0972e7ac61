pub mod config;
pub mod error;
pub mod logger;
pub mod stats;

// Re-export commonly used types
pub use config::{AppConfig, ProviderKind, ProviderSettings};
pub use error::TextBriefError;
pub use stats::{count_characters, count_sentences, count_words, TextStats};
pub type Result<T> = std::result::Result<T, TextBriefError>;
