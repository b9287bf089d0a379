pub mod answer_bundle;
pub mod identifiers;

pub use answer_bundle::{AnswerError, AnswerMetadata, AnswerResult, Query};
pub use identifiers::{CorpusFingerprint, FileId, FileIdError};
