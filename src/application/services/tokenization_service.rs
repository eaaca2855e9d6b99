use std::sync::Arc;

use crate::application::dto::tokenization_dto::{CountTokensRequestDto, CountTokensResponseDto};
use crate::application::errors::ApplicationError;
use crate::domain::repositories::tokenizer_repository::TokenizerRepository;

pub const MISSING_INPUT_MESSAGE: &str = "Missing model_id or text";

pub struct TokenizationService {
    tokenizer_repository: Arc<dyn TokenizerRepository>,
}

impl TokenizationService {
    pub fn new(tokenizer_repository: Arc<dyn TokenizerRepository>) -> Self {
        Self {
            tokenizer_repository,
        }
    }

    /// Blocking: the first request for a model may download its tokenizer.
    pub fn count_tokens(
        &self,
        dto: CountTokensRequestDto,
    ) -> Result<CountTokensResponseDto, ApplicationError> {
        let (model_id, text) = Self::validate(dto)?;

        let tokenized = self
            .tokenizer_repository
            .tokenize(&model_id, &text)
            .map_err(|error| {
                tracing::error!("Failed to tokenize with {}: {}", model_id, error);
                ApplicationError::TokenizerUnavailable(format!(
                    "Failed to load tokenizer for {}",
                    model_id
                ))
            })?;

        Ok(CountTokensResponseDto::from(tokenized))
    }

    fn validate(dto: CountTokensRequestDto) -> Result<(String, String), ApplicationError> {
        match (dto.model_id, dto.text) {
            (Some(model_id), Some(text)) if !model_id.is_empty() && !text.is_empty() => {
                Ok((model_id, text))
            }
            _ => Err(ApplicationError::ValidationError(
                MISSING_INPUT_MESSAGE.to_string(),
            )),
        }
    }
}
