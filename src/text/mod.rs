pub mod sentences;
pub mod stopwords;
pub mod tokenizer;

pub use sentences::{split_sentences, Sentence};
pub use stopwords::Stopwords;
pub use tokenizer::Tokenizer;
