pub mod files;
pub mod idf;
pub mod sentences;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use files::top_files;
pub use idf::{IdfError, IdfTable};
pub use sentences::top_sentences;

/// What to do when a query term was never seen in the scored corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTermPolicy {
    /// Score the term as zero contribution.
    #[default]
    ZeroContribution,
    /// Surface the missing term as an error.
    Fail,
}

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Query term {0:?} does not appear in the scored corpus")]
    UnknownTerm(String),
}
