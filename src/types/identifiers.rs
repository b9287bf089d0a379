use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

#[derive(Debug, Error)]
pub enum FileIdError {
    #[error("Source path is outside the corpus root")]
    OutsideRoot,
    #[error("Path involves invalid UTF-8")]
    InvalidUtf8,
}

impl FileId {
    /// Create a FileId from a corpus root and the path of a file inside it.
    pub fn from_path(root: &Path, source: &Path) -> Result<Self, FileIdError> {
        let rel = source
            .strip_prefix(root)
            .map_err(|_| FileIdError::OutsideRoot)?;

        let normalized = normalize_path(rel)?;

        Ok(FileId(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Forward slashes, no leading "./". Case is preserved: corpora live on
/// case-sensitive filesystems and distinct files must not collide.
fn normalize_path(path: &Path) -> Result<String, FileIdError> {
    let s = path.to_str().ok_or(FileIdError::InvalidUtf8)?;

    let normalized = s.replace('\\', "/").trim_start_matches("./").to_string();

    Ok(normalized)
}

/// Content fingerprint of an entire corpus.
///
/// Hashes the sorted `id:content-hash` lines, so the same files with the
/// same contents always fingerprint identically, regardless of load order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorpusFingerprint(String);

impl CorpusFingerprint {
    pub fn from_texts(texts: &BTreeMap<FileId, String>) -> Self {
        let mut hasher = Sha256::new();

        // BTreeMap iteration is already id-sorted.
        for (id, content) in texts {
            let mut content_hasher = Sha256::new();
            content_hasher.update(content.as_bytes());
            let content_hash = hex::encode(content_hasher.finalize());

            let line = format!("{}:{}", id.as_str(), content_hash);
            hasher.update(line.as_bytes());
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CorpusFingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
