use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::ranking::idf::IdfTable;
use crate::ranking::{RankingError, UnknownTermPolicy};
use crate::types::{FileId, Query};

/// Rank whole files by summed TF-IDF over the query terms and return the
/// top `n` ids, best first.
///
/// score(file) = Σ over query terms of (raw term frequency in the file's
/// token sequence) × idf(term). The sort is stable and descending, so equal
/// scores keep the corpus iteration order (ascending id). Asking for more
/// files than exist returns them all.
pub fn top_files(
    query: &Query,
    files: &BTreeMap<FileId, Vec<String>>,
    idfs: &IdfTable,
    n: usize,
    policy: UnknownTermPolicy,
) -> Result<Vec<FileId>, RankingError> {
    // Resolve query-term idfs up front so the unknown-term policy applies
    // once per term, not once per file.
    let mut term_idfs: Vec<(&str, f64)> = Vec::with_capacity(query.terms.len());
    for term in &query.terms {
        match idfs.get(term) {
            Some(idf) => term_idfs.push((term.as_str(), idf)),
            None => match policy {
                UnknownTermPolicy::ZeroContribution => {}
                UnknownTermPolicy::Fail => {
                    return Err(RankingError::UnknownTerm(term.clone()));
                }
            },
        }
    }

    // Scoring Phase
    let mut scored: Vec<(&FileId, f64)> = files
        .iter()
        .map(|(id, tokens)| {
            let score: f64 = term_idfs
                .iter()
                .map(|(term, idf)| {
                    let tf = tokens.iter().filter(|token| token.as_str() == *term).count();
                    tf as f64 * idf
                })
                .sum();
            (id, score)
        })
        .collect();

    // Ordering Phase: descending score, stable on ties.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    Ok(scored
        .into_iter()
        .take(n)
        .map(|(id, _)| id.clone())
        .collect())
}
