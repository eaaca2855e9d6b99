use crate::domain::errors::DomainError;
use crate::domain::models::tokenization::TokenizedText;

pub trait TokenizerRepository: Send + Sync {
    /// Resolve the tokenizer for `model_id` (loading and caching it on first
    /// use) and split `text` into display tokens.
    fn tokenize(&self, model_id: &str, text: &str) -> Result<TokenizedText, DomainError>;
}
