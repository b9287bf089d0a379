use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::ranking::{IdfError, RankingError};
use crate::text::Tokenizer;

/// A fully qualified, normalized question.
///
/// Terms are the tokenizer's surviving tokens with duplicates collapsed;
/// order is irrelevant to scoring, so a sorted set keeps iteration
/// deterministic.
#[derive(Debug, Clone)]
pub struct Query {
    pub raw: String,
    pub terms: BTreeSet<String>,
}

impl Query {
    pub fn new(raw: impl Into<String>, tokenizer: &Tokenizer) -> Self {
        let raw = raw.into();
        let terms = tokenizer.tokenize(&raw).into_iter().collect();

        Self { raw, terms }
    }
}

/// The final result of answering one question.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct AnswerResult {
    /// Ranked answer sentences, best first.
    pub answers: Vec<String>,
    pub metadata: AnswerMetadata,
}

/// Explanation of how the answers were produced.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct AnswerMetadata {
    pub query: String,
    pub query_terms: Vec<String>,

    pub corpus_fingerprint: String,

    pub files_considered: usize,
    pub files_searched: Vec<String>,
    pub sentences_considered: usize,

    pub answered_at: DateTime<Utc>, // informational only
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// The file corpus or the extracted sentence corpus had nothing to score.
    #[error(transparent)]
    EmptyCorpus(#[from] IdfError),

    #[error(transparent)]
    Ranking(#[from] RankingError),
}
