//! Word, sentence and character counts

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word regex"));

// A run of terminators counts once ("..." or "?!")
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));

/// Number of word-like tokens (runs of letters, digits and underscores)
pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

/// Number of sentence-terminator runs
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_RE.find_iter(text).count()
}

/// Number of characters (Unicode scalar values), no normalization
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Statistics for one piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub character_count: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        Self {
            word_count: count_words(text),
            sentence_count: count_sentences(text),
            character_count: count_characters(text),
        }
    }
}
