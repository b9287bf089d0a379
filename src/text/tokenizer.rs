use unicode_segmentation::UnicodeSegmentation;

use crate::text::stopwords::Stopwords;

/// Normalizes raw text into a sequence of significant word tokens.
///
/// Segmentation follows UAX #29 word boundaries, which keeps contractions
/// (`don't`) and punctuation-embedded tokens (`u.s.a`) whole while emitting
/// standalone punctuation as its own segments.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: Stopwords,
}

impl Tokenizer {
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    /// Lowercased word tokens in input order, with punctuation-only segments
    /// and stopwords removed. Infallible; empty input yields an empty vec.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .map(str::to_lowercase)
            .filter(|token| has_word_content(token))
            .filter(|token| !self.stopwords.contains(token))
            .collect()
    }
}

/// Whole-token check: a token survives if any character is alphanumeric.
/// Punctuation inside a surviving token is never stripped.
fn has_word_content(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}
