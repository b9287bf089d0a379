use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::corpus::Corpus;
use crate::ranking::{top_files, top_sentences, IdfTable, UnknownTermPolicy};
use crate::text::{split_sentences, Sentence, Tokenizer};
use crate::types::{AnswerError, AnswerMetadata, AnswerResult, FileId, Query};

/// Pipeline knobs, with explicit serializable defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// How many ranked files feed sentence extraction.
    pub file_matches: usize,
    /// How many ranked sentences are returned.
    pub sentence_matches: usize,
    /// Policy for query terms absent from the scored corpus.
    pub unknown_terms: UnknownTermPolicy,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
            unknown_terms: UnknownTermPolicy::default(),
        }
    }
}

/// Orchestrates one full question: tokenize → file idf → rank files →
/// extract sentences → sentence idf → rank sentences.
///
/// Every intermediate (corpus, idf tables, scores) is created per call and
/// discarded at the end; nothing is shared across invocations.
pub struct AnswerEngine {
    tokenizer: Tokenizer,
    config: AnswerConfig,
}

impl Default for AnswerEngine {
    fn default() -> Self {
        Self {
            tokenizer: Tokenizer::default(),
            config: AnswerConfig::default(),
        }
    }
}

impl AnswerEngine {
    pub fn new(tokenizer: Tokenizer, config: AnswerConfig) -> Self {
        Self { tokenizer, config }
    }

    pub fn config(&self) -> &AnswerConfig {
        &self.config
    }

    pub fn answer(
        &self,
        texts: &BTreeMap<FileId, String>,
        question: &str,
    ) -> Result<AnswerResult, AnswerError> {
        let corpus = Corpus::from_texts(texts, &self.tokenizer);
        let query = Query::new(question, &self.tokenizer);

        // 1. File Retrieval Phase
        let file_idfs = IdfTable::from_documents(corpus.token_sequences())?;
        let filenames = top_files(
            &query,
            corpus.files(),
            &file_idfs,
            self.config.file_matches,
            self.config.unknown_terms,
        )?;

        // 2. Sentence Extraction Phase, in ranked file order. The same
        // sentence appearing in more than one top file collapses into a
        // single candidate.
        let mut sentences: Vec<Sentence> = Vec::new();
        let mut seen: BTreeSet<String> = BTreeSet::new();
        for filename in &filenames {
            let Some(text) = texts.get(filename) else {
                continue;
            };
            for sentence in split_sentences(text, &self.tokenizer) {
                if seen.insert(sentence.text.clone()) {
                    sentences.push(sentence);
                }
            }
        }
        debug!(
            files = filenames.len(),
            sentences = sentences.len(),
            "extracted candidate sentences"
        );

        // 3. Sentence Ranking Phase, against a fresh sentence-level table.
        let sentence_idfs = IdfTable::from_documents(sentences.iter().map(|s| s.tokens.as_slice()))?;
        let answers = top_sentences(
            &query,
            &sentences,
            &sentence_idfs,
            self.config.sentence_matches,
            self.config.unknown_terms,
        )?;

        info!(query = question, answers = answers.len(), "answered query");

        let metadata = AnswerMetadata {
            query: query.raw,
            query_terms: query.terms.into_iter().collect(),
            corpus_fingerprint: corpus.fingerprint().as_str().to_string(),
            files_considered: corpus.len(),
            files_searched: filenames
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
            sentences_considered: sentences.len(),
            answered_at: Utc::now(),
        };

        Ok(AnswerResult { answers, metadata })
    }
}
