use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("no sentences found in text")]
    NoSentencesFound,
    #[error("at least {required} sentences are required, found {found}")]
    InsufficientSentences { found: usize, required: usize },
}

impl GenerateError {
    pub fn for_count(found: usize, required: usize) -> Self {
        if found == 0 {
            GenerateError::NoSentencesFound
        } else {
            GenerateError::InsufficientSentences { found, required }
        }
    }
}
