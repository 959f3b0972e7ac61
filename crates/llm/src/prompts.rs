//! Prompt templates for summarization

use crate::types::{FormatMode, LengthTier};

/// Faithfulness directive appended to every prompt
pub const FAITHFULNESS_DIRECTIVE: &str = "Important: Only include information explicitly stated in the text. \
Do not add facts, interpretations, or details not present in the original.\n\
If anything is unclear, omit it rather than fabricating information.";

/// Delimiter placed between the instructions and the source text
pub const SOURCE_DELIMITER: &str = "Text to summarize:\n\n";

/// Instruction for the requested summary length
pub fn length_clause(tier: LengthTier) -> &'static str {
    match tier {
        LengthTier::Short => "Provide a BRIEF summary (2-3 sentences).",
        LengthTier::Long => "Provide a DETAILED summary with multiple paragraphs.",
        LengthTier::Medium => "Provide a MODERATE-LENGTH summary (one paragraph).",
    }
}

/// Instruction for the requested output shape
pub fn format_clause(mode: FormatMode) -> &'static str {
    match mode {
        FormatMode::Bullets => {
            "Format your response as bullet points (use • or -). \
             Each bullet should capture a key point from the text."
        }
        FormatMode::Takeaways => {
            "Provide KEY TAKEAWAYS numbered 1, 2, 3, etc. \
             Focus on the most important insights and actionable points."
        }
        FormatMode::Paragraph => "Write the summary in clear, flowing paragraph form.",
    }
}

/// Build the full instruction prompt; `raw_text` is appended verbatim
pub fn build_prompt(raw_text: &str, tier: LengthTier, mode: FormatMode) -> String {
    format!(
        "{} {}\n\n{}\n\n{}{}",
        length_clause(tier),
        format_clause(mode),
        FAITHFULNESS_DIRECTIVE,
        SOURCE_DELIMITER,
        raw_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODERATE: &str = "Provide a MODERATE-LENGTH summary (one paragraph).";
    const PARAGRAPH: &str = "Write the summary in clear, flowing paragraph form.";

    #[test]
    fn test_unrecognized_values_use_defaults() {
        for value in ["2", "", "medium", "4", "huge"] {
            let tier = LengthTier::from_form_value(value);
            let prompt = build_prompt("text", tier, FormatMode::Paragraph);
            assert!(prompt.starts_with(MODERATE), "value {:?}", value);
        }

        for value in ["paragraph", "", "table", "BULLETS"] {
            let mode = FormatMode::from_form_value(value);
            let prompt = build_prompt("text", LengthTier::Medium, mode);
            assert!(prompt.contains(PARAGRAPH), "value {:?}", value);
        }
    }

    #[test]
    fn test_length_and_format_clauses() {
        let prompt = build_prompt("x", LengthTier::Short, FormatMode::Bullets);
        assert!(prompt.starts_with("Provide a BRIEF summary (2-3 sentences). Format your response as bullet points"));

        let prompt = build_prompt("x", LengthTier::Long, FormatMode::Takeaways);
        assert!(prompt.starts_with("Provide a DETAILED summary with multiple paragraphs. Provide KEY TAKEAWAYS"));
        assert!(!prompt.contains(PARAGRAPH));
    }

    #[test]
    fn test_prompt_layout() {
        let prompt = build_prompt("Body.", LengthTier::Medium, FormatMode::Paragraph);
        let expected = format!(
            "{} {}\n\n{}\n\nText to summarize:\n\nBody.",
            MODERATE, PARAGRAPH, FAITHFULNESS_DIRECTIVE
        );
        assert_eq!(prompt, expected);
        assert!(prompt.contains("omit it rather than fabricating"));
    }

    #[test]
    fn test_prompt_ends_with_raw_text() {
        let raw = "  <b>Tags</b> & \"quotes\"\n\n{braces} stay as-is  ";
        let prompt = build_prompt(raw, LengthTier::Long, FormatMode::Bullets);
        assert!(prompt.ends_with(raw));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_prompt("Same input.", LengthTier::Short, FormatMode::Takeaways);
        let b = build_prompt("Same input.", LengthTier::Short, FormatMode::Takeaways);
        assert_eq!(a, b);
    }
}
