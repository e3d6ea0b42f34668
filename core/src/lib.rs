pub mod corpus;
pub mod document;
pub mod error;
pub mod idf;
pub mod index;
pub mod pipeline;
pub mod segment;
pub mod sentence;
pub mod tokenizer;

pub use document::{rank_files, top_files};
pub use error::RankError;
pub use idf::compute_idfs;
pub use index::*;
pub use pipeline::{Answer, Pipeline, RankConfig};
pub use sentence::{rank_sentences, top_sentences};
pub use tokenizer::{Tokenizer, TokenizerConfig};
