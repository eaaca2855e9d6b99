use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Transient failure; retrying the same request may succeed.
    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Whether this failure means the requested tokenizer does not exist or
    /// can never load, as opposed to a transient failure.
    pub fn is_permanent(&self) -> bool {
        matches!(self, DomainError::NotFound(_) | DomainError::InvalidData(_))
    }
}
