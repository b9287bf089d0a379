use std::fs;
use std::path::Path;

use answer_core::corpus::{load_directory, Corpus};
use answer_core::text::Tokenizer;
use answer_core::types::{FileId, FileIdError};
use tempfile::tempdir;

#[test]
fn loads_txt_files_recursively_with_normalized_ids() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "alpha words").unwrap();
    fs::create_dir(dir.path().join("notes")).unwrap();
    fs::write(dir.path().join("notes").join("b.txt"), "beta words").unwrap();

    let texts = load_directory(dir.path()).unwrap();

    let ids: Vec<&str> = texts.keys().map(FileId::as_str).collect();
    assert_eq!(ids, vec!["a.txt", "notes/b.txt"]);

    let nested = texts.keys().find(|id| id.as_str() == "notes/b.txt").unwrap();
    assert_eq!(texts[nested], "beta words");
}

#[test]
fn non_txt_files_are_ignored() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("keep.txt"), "kept").unwrap();
    fs::write(dir.path().join("skip.md"), "skipped").unwrap();
    fs::write(dir.path().join("no_extension"), "skipped").unwrap();

    let texts = load_directory(dir.path()).unwrap();

    assert_eq!(texts.len(), 1);
    assert_eq!(texts.keys().next().unwrap().as_str(), "keep.txt");
}

#[test]
fn empty_directory_loads_as_empty_mapping() {
    let dir = tempdir().unwrap();

    let texts = load_directory(dir.path()).unwrap();

    // Rejecting a corpus with nothing to score is the pipeline's call.
    assert!(texts.is_empty());
}

#[test]
fn missing_root_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    assert!(load_directory(&missing).is_err());
}

#[test]
fn file_ids_reject_paths_outside_the_root() {
    let root = Path::new("/corpus");
    let outside = Path::new("/elsewhere/file.txt");

    let result = FileId::from_path(root, outside);

    assert!(matches!(result, Err(FileIdError::OutsideRoot)));
}

#[test]
fn corpus_fingerprint_tracks_content_not_build_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "alpha").unwrap();
    fs::write(dir.path().join("b.txt"), "beta").unwrap();

    let texts = load_directory(dir.path()).unwrap();
    let tokenizer = Tokenizer::default();

    let first = Corpus::from_texts(&texts, &tokenizer);
    let second = Corpus::from_texts(&texts, &tokenizer);
    assert_eq!(first.fingerprint(), second.fingerprint());

    fs::write(dir.path().join("b.txt"), "beta changed").unwrap();
    let changed_texts = load_directory(dir.path()).unwrap();
    let changed = Corpus::from_texts(&changed_texts, &tokenizer);
    assert_ne!(
        first.fingerprint(),
        changed.fingerprint(),
        "content changes must change the fingerprint"
    );
}
