#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("vocabulary contains no non-empty word")]
    EmptyVocabulary,
    #[error("suggestion limit must be at least 1, got {0}")]
    InvalidLimit(usize),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
