use unicode_segmentation::UnicodeSegmentation;

use crate::text::tokenizer::Tokenizer;

/// A candidate answer sentence: the raw text as it will be printed, plus
/// the token sequence it is scored on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub tokens: Vec<String>,
}

/// Split raw file text into tokenized sentences.
///
/// Paragraph breaks (newlines) are hard boundaries; within a paragraph,
/// UAX #29 sentence boundaries apply. Sentences whose tokens all fall to
/// the punctuation or stopword filters are dropped — they can never match
/// a query and would only distort sentence-level document frequencies.
pub fn split_sentences(text: &str, tokenizer: &Tokenizer) -> Vec<Sentence> {
    let mut sentences = Vec::new();

    for passage in text.split('\n') {
        for raw in passage.unicode_sentences() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }

            let tokens = tokenizer.tokenize(trimmed);
            if tokens.is_empty() {
                continue;
            }

            sentences.push(Sentence {
                text: trimmed.to_string(),
                tokens,
            });
        }
    }

    sentences
}
