use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::types::{FileId, FileIdError};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    FileId(#[from] FileIdError),
    #[error("Duplicate file id after path normalization: {0}")]
    DuplicateFile(String),
}

/// Read every `.txt` file under `root` (recursively) into an id → contents
/// mapping.
///
/// Contents must be UTF-8; anything else is an error here, before the
/// ranking core ever sees the text. An empty mapping is a valid return —
/// the pipeline rejects it when it computes frequencies.
pub fn load_directory(root: &Path) -> Result<BTreeMap<FileId, String>, CorpusError> {
    let mut texts = BTreeMap::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "txt") {
            continue;
        }

        let id = FileId::from_path(root, path)?;
        let content = fs::read_to_string(path)?;
        debug!(file = id.as_str(), bytes = content.len(), "loaded corpus file");

        if texts.insert(id.clone(), content).is_some() {
            return Err(CorpusError::DuplicateFile(id.as_str().to_string()));
        }
    }

    info!(root = %root.display(), files = texts.len(), "corpus loaded");

    Ok(texts)
}
