use std::collections::BTreeMap;
use std::path::Path;

use answer_core::ranking::{top_files, IdfTable, RankingError, UnknownTermPolicy};
use answer_core::text::{Stopwords, Tokenizer};
use answer_core::types::{FileId, Query};

fn make_id(s: &str) -> FileId {
    let root = Path::new("/corpus");
    let path = root.join(s);
    FileId::from_path(root, &path).unwrap()
}

fn make_corpus(files: &[(&str, &[&str])]) -> BTreeMap<FileId, Vec<String>> {
    files
        .iter()
        .map(|(id, tokens)| {
            let tokens = tokens.iter().map(|t| t.to_string()).collect();
            (make_id(id), tokens)
        })
        .collect()
}

fn make_query(terms: &str) -> Query {
    Query::new(terms, &Tokenizer::new(Stopwords::none()))
}

fn idfs_of(corpus: &BTreeMap<FileId, Vec<String>>) -> IdfTable {
    IdfTable::from_documents(corpus.values().map(Vec::as_slice)).unwrap()
}

fn ids(ranked: &[FileId]) -> Vec<&str> {
    ranked.iter().map(FileId::as_str).collect()
}

#[test]
fn ranks_by_summed_term_frequency_times_idf() {
    let corpus = make_corpus(&[
        ("a.txt", &["cat", "cat", "dog"]),
        ("b.txt", &["cat"]),
        ("c.txt", &["bird"]),
    ]);
    let idfs = idfs_of(&corpus);
    let query = make_query("cat");

    let ranked = top_files(&query, &corpus, &idfs, 2, UnknownTermPolicy::default()).unwrap();

    // idf(cat) = ln(3/2) > 0; two occurrences beat one.
    assert_eq!(ids(&ranked), vec!["a.txt", "b.txt"]);
}

#[test]
fn requesting_more_files_than_exist_returns_them_all() {
    let corpus = make_corpus(&[("a.txt", &["cat"]), ("b.txt", &["dog"])]);
    let idfs = idfs_of(&corpus);
    let query = make_query("cat");

    let ranked = top_files(&query, &corpus, &idfs, 10, UnknownTermPolicy::default()).unwrap();

    assert_eq!(ranked.len(), 2, "n beyond |files| must not be an error");
}

#[test]
fn requesting_zero_files_returns_nothing() {
    let corpus = make_corpus(&[("a.txt", &["cat"])]);
    let idfs = idfs_of(&corpus);
    let query = make_query("cat");

    let ranked = top_files(&query, &corpus, &idfs, 0, UnknownTermPolicy::default()).unwrap();

    assert!(ranked.is_empty());
}

#[test]
fn identical_arguments_rank_identically() {
    let corpus = make_corpus(&[
        ("a.txt", &["cat", "dog", "cat"]),
        ("b.txt", &["dog", "dog"]),
        ("c.txt", &["cat", "bird"]),
    ]);
    let idfs = idfs_of(&corpus);
    let query = make_query("cat dog bird");

    let first = top_files(&query, &corpus, &idfs, 3, UnknownTermPolicy::default()).unwrap();
    let second = top_files(&query, &corpus, &idfs, 3, UnknownTermPolicy::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn a_file_of_nothing_but_query_terms_outranks_files_without_them() {
    let corpus = make_corpus(&[
        ("all-matches.txt", &["cat", "cat"]),
        ("no-matches.txt", &["dog", "bird", "fish"]),
    ]);
    let idfs = idfs_of(&corpus);
    let query = make_query("cat");

    let ranked = top_files(&query, &corpus, &idfs, 2, UnknownTermPolicy::default()).unwrap();

    assert_eq!(ids(&ranked), vec!["all-matches.txt", "no-matches.txt"]);
}

#[test]
fn equal_scores_keep_ascending_id_order() {
    // "same" is in every file, so idf = 0 and every score is 0.0.
    let corpus = make_corpus(&[
        ("zebra.txt", &["same"]),
        ("apple.txt", &["same"]),
        ("mango.txt", &["same"]),
    ]);
    let idfs = idfs_of(&corpus);
    let query = make_query("same");

    let ranked = top_files(&query, &corpus, &idfs, 3, UnknownTermPolicy::default()).unwrap();

    assert_eq!(ids(&ranked), vec!["apple.txt", "mango.txt", "zebra.txt"]);
}

#[test]
fn unknown_query_terms_contribute_zero_by_default() {
    let corpus = make_corpus(&[("a.txt", &["cat", "cat"]), ("b.txt", &["cat"])]);
    let idfs = idfs_of(&corpus);

    let with_unknown = top_files(
        &make_query("cat warp"),
        &corpus,
        &idfs,
        2,
        UnknownTermPolicy::ZeroContribution,
    )
    .unwrap();
    let without = top_files(
        &make_query("cat"),
        &corpus,
        &idfs,
        2,
        UnknownTermPolicy::ZeroContribution,
    )
    .unwrap();

    assert_eq!(with_unknown, without, "an unseen term must not change the ranking");
}

#[test]
fn unknown_query_terms_fail_under_the_strict_policy() {
    let corpus = make_corpus(&[("a.txt", &["cat"])]);
    let idfs = idfs_of(&corpus);
    let query = make_query("cat warp");

    let result = top_files(&query, &corpus, &idfs, 1, UnknownTermPolicy::Fail);

    match result {
        Err(RankingError::UnknownTerm(term)) => assert_eq!(term, "warp"),
        other => panic!("expected UnknownTerm error, got {other:?}"),
    }
}
