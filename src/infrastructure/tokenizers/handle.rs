use std::sync::Arc;

use tiktoken_rs::CoreBPE;
use tokenizers::Tokenizer;

use crate::domain::errors::DomainError;
use crate::domain::models::tokenization::{BytePairEncoding, TokenizedText};
use crate::infrastructure::tokenizers::byte_pair;
use crate::infrastructure::tokenizers::regex_tokenizer::RegexTokenizer;

/// A loaded tokenizer, shared by every request for the same model id.
#[derive(Clone)]
pub enum TokenizerHandle {
    BytePair {
        encoding: BytePairEncoding,
        bpe: Arc<CoreBPE>,
    },
    Subword {
        tokenizer: Arc<Tokenizer>,
        /// Set when the tokenizer stands in for a different model family.
        approximation: bool,
    },
    Regex(RegexTokenizer),
}

impl TokenizerHandle {
    pub fn kind(&self) -> &'static str {
        match self {
            TokenizerHandle::BytePair { encoding, .. } => encoding.name(),
            TokenizerHandle::Subword { .. } => "subword",
            TokenizerHandle::Regex(_) => "regex",
        }
    }

    pub fn tokenize(&self, text: &str) -> Result<TokenizedText, DomainError> {
        match self {
            TokenizerHandle::BytePair { bpe, .. } => Ok(TokenizedText {
                tokens: byte_pair::tokenize(bpe, text),
                is_approximation: false,
            }),
            TokenizerHandle::Subword {
                tokenizer,
                approximation,
            } => Ok(TokenizedText {
                tokens: Self::tokenize_subword(tokenizer, text)?,
                is_approximation: *approximation,
            }),
            TokenizerHandle::Regex(regex) => Ok(TokenizedText {
                tokens: regex.split(text),
                is_approximation: true,
            }),
        }
    }

    // Ids are decoded one at a time, so merged pieces keep their own spacing.
    fn tokenize_subword(tokenizer: &Tokenizer, text: &str) -> Result<Vec<String>, DomainError> {
        let encoding = tokenizer.encode(text, false).map_err(|error| {
            DomainError::InternalError(format!("Failed to encode text: {}", error))
        })?;

        encoding
            .get_ids()
            .iter()
            .map(|id| {
                tokenizer.decode(&[*id], true).map_err(|error| {
                    DomainError::InternalError(format!("Failed to decode token id {}: {}", id, error))
                })
            })
            .collect()
    }
}
