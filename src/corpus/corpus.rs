use std::collections::BTreeMap;

use crate::text::Tokenizer;
use crate::types::{CorpusFingerprint, FileId};

/// A tokenized corpus, built once per invocation and read-only thereafter.
///
/// Files are keyed in a BTreeMap so iteration — and therefore stable-sort
/// tie order during ranking — is always ascending by id.
#[derive(Debug, Clone)]
pub struct Corpus {
    files: BTreeMap<FileId, Vec<String>>,
    fingerprint: CorpusFingerprint,
}

impl Corpus {
    /// Tokenize every file of the raw-text mapping.
    pub fn from_texts(texts: &BTreeMap<FileId, String>, tokenizer: &Tokenizer) -> Self {
        let files = texts
            .iter()
            .map(|(id, text)| (id.clone(), tokenizer.tokenize(text)))
            .collect();

        Self {
            files,
            fingerprint: CorpusFingerprint::from_texts(texts),
        }
    }

    pub fn files(&self) -> &BTreeMap<FileId, Vec<String>> {
        &self.files
    }

    /// The token sequences alone, in id order, for IDF computation.
    pub fn token_sequences(&self) -> impl Iterator<Item = &[String]> {
        self.files.values().map(Vec::as_slice)
    }

    pub fn fingerprint(&self) -> &CorpusFingerprint {
        &self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
