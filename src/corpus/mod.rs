pub mod corpus;
pub mod loader;

pub use corpus::Corpus;
pub use loader::{load_directory, CorpusError};
