use std::cmp::Ordering;

use crate::ranking::idf::IdfTable;
use crate::ranking::{RankingError, UnknownTermPolicy};
use crate::text::Sentence;
use crate::types::Query;

/// Rank sentences by summed matching-term IDF and return the top `n`
/// sentence texts, best first.
///
/// The primary score is presence-only: each query term found in the
/// sentence contributes its idf exactly once, however often it repeats.
/// Every sentence gets an explicit score — zero when nothing matches — so
/// the ordering is total and zero-match sentences sink to the bottom
/// instead of vanishing.
///
/// The tie-break is deliberately narrow: it fires only when the top two
/// primary scores are exactly equal, and then re-ranks just the first
/// `n + 1` sentences of the ordering by query-term density. A tie anywhere
/// below position 1 is left to the stable sort.
pub fn top_sentences(
    query: &Query,
    sentences: &[Sentence],
    idfs: &IdfTable,
    n: usize,
    policy: UnknownTermPolicy,
) -> Result<Vec<String>, RankingError> {
    // Scoring Phase
    let mut scored: Vec<(&Sentence, f64)> = Vec::with_capacity(sentences.len());
    for sentence in sentences {
        let mut score = 0.0;
        for term in &query.terms {
            if !sentence.tokens.iter().any(|token| token == term) {
                continue;
            }
            match idfs.get(term) {
                Some(idf) => score += idf,
                None => match policy {
                    UnknownTermPolicy::ZeroContribution => {}
                    UnknownTermPolicy::Fail => {
                        return Err(RankingError::UnknownTerm(term.clone()));
                    }
                },
            }
        }
        scored.push((sentence, score));
    }

    // Ordering Phase: descending score, stable on ties (extraction order).
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    // Tie-break Phase. Guarded: with fewer than two sentences there is
    // nothing to compare.
    if scored.len() >= 2 && scored[0].1 == scored[1].1 {
        let window = scored.len().min(n + 1);

        let mut by_density: Vec<(&Sentence, f64)> = scored[..window]
            .iter()
            .map(|(sentence, _)| (*sentence, query_term_density(query, sentence)))
            .collect();
        by_density.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        // Only the re-ranked window can contribute to the answer; the rest
        // of the step-2 ordering stays as it was, beyond reach of `n`.
        return Ok(by_density
            .into_iter()
            .take(n)
            .map(|(sentence, _)| sentence.text.clone())
            .collect());
    }

    Ok(scored
        .into_iter()
        .take(n)
        .map(|(sentence, _)| sentence.text.clone())
        .collect())
}

/// Fraction of the sentence's tokens that are query terms.
fn query_term_density(query: &Query, sentence: &Sentence) -> f64 {
    if sentence.tokens.is_empty() {
        return 0.0;
    }

    let matches = sentence
        .tokens
        .iter()
        .filter(|token| query.terms.contains(token.as_str()))
        .count();

    matches as f64 / sentence.tokens.len() as f64
}
