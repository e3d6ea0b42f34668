#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RankError {
    #[error("cannot compute IDF values over an empty collection")]
    EmptyCollection,

    #[error("requested {requested} results but only {available} candidates are available")]
    OutOfRange { requested: usize, available: usize },

    #[error("sentence has no tokens: {sentence:?}")]
    EmptySentence { sentence: String },
}
