use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdfError {
    #[error("Cannot compute inverse document frequencies over an empty corpus")]
    EmptyCorpus,
}

/// Inverse document frequencies for every token of one corpus.
///
/// A table is scoped to the corpus it was computed from. File-level and
/// sentence-level corpora get separate tables; the two are never mixed.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfTable {
    scores: BTreeMap<String, f64>,
}

impl IdfTable {
    /// Compute `idf(t) = ln(n / df(t))` over a corpus of token sequences,
    /// where `df` counts documents containing `t` at least once (presence,
    /// not frequency).
    ///
    /// The table holds an entry for every token appearing in at least one
    /// document and none for tokens absent from all. An empty corpus is
    /// rejected outright: `n = 0` has no meaningful frequencies.
    pub fn from_documents<'a, I>(documents: I) -> Result<Self, IdfError>
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut document_count: usize = 0;
        let mut presence: BTreeMap<&'a str, usize> = BTreeMap::new();

        for tokens in documents {
            document_count += 1;

            let distinct: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in distinct {
                *presence.entry(token).or_insert(0) += 1;
            }
        }

        if document_count == 0 {
            return Err(IdfError::EmptyCorpus);
        }

        let total = document_count as f64;
        let scores = presence
            .into_iter()
            .map(|(token, df)| (token.to_string(), (total / df as f64).ln()))
            .collect();

        Ok(Self { scores })
    }

    pub fn get(&self, token: &str) -> Option<f64> {
        self.scores.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(token, idf)| (token.as_str(), *idf))
    }
}
