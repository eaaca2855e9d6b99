use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Tokenizer unavailable: {0}")]
    TokenizerUnavailable(String),
}

impl ApplicationError {
    /// Text shown to the caller, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            ApplicationError::ValidationError(msg) | ApplicationError::TokenizerUnavailable(msg) => {
                msg
            }
        }
    }
}
