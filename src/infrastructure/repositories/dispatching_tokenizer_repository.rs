use std::sync::Arc;
use std::time::Instant;

use tokenizers::Tokenizer;

use crate::domain::errors::DomainError;
use crate::domain::models::tokenization::{FallbackPolicy, TokenizedText, TokenizerFamily};
use crate::domain::repositories::tokenizer_repository::TokenizerRepository;
use crate::infrastructure::apis::hub_tokenizer_source::TokenizerSource;
use crate::infrastructure::tokenizers::byte_pair;
use crate::infrastructure::tokenizers::cache::TokenizerCache;
use crate::infrastructure::tokenizers::handle::TokenizerHandle;
use crate::infrastructure::tokenizers::regex_tokenizer::RegexTokenizer;

pub const DEFAULT_STAND_IN_REPOSITORY: &str = "openai-community/gpt2";

/// Routes model ids to a tokenizer family and keeps every loaded tokenizer
/// for the lifetime of the process.
pub struct DispatchingTokenizerRepository {
    cache: TokenizerCache,
    /// `None` when the hub is disabled.
    source: Option<Arc<dyn TokenizerSource>>,
    stand_in_repository: String,
    fallback: FallbackPolicy,
    regex: RegexTokenizer,
}

impl DispatchingTokenizerRepository {
    pub fn new(
        source: Option<Arc<dyn TokenizerSource>>,
        stand_in_repository: impl Into<String>,
        fallback: FallbackPolicy,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            cache: TokenizerCache::new(),
            source,
            stand_in_repository: stand_in_repository.into(),
            fallback,
            regex: RegexTokenizer::new()?,
        })
    }

    pub fn resolve(&self, model_id: &str) -> Result<TokenizerHandle, DomainError> {
        self.cache
            .get_or_try_load(model_id, || self.load_with_fallback(model_id))
    }

    #[cfg(test)]
    fn is_cached(&self, model_id: &str) -> Result<bool, DomainError> {
        self.cache.contains(model_id)
    }

    fn load_with_fallback(&self, model_id: &str) -> Result<TokenizerHandle, DomainError> {
        let family = TokenizerFamily::classify(model_id);
        tracing::info!("Loading tokenizer for {} ({:?})", model_id, family);
        let started = Instant::now();

        match self.load(model_id, family) {
            Ok(handle) => {
                tracing::info!(
                    "Loaded {} tokenizer for {} in {:?}",
                    handle.kind(),
                    model_id,
                    started.elapsed()
                );
                Ok(handle)
            }
            Err(error)
                if !matches!(family, TokenizerFamily::BytePair(_))
                    && self.fallback.allows(error.is_permanent()) =>
            {
                tracing::warn!(
                    "Falling back to regex tokenizer for {}: {}",
                    model_id,
                    error
                );
                Ok(TokenizerHandle::Regex(self.regex.clone()))
            }
            Err(error) => {
                tracing::warn!("Failed to load tokenizer for {}: {}", model_id, error);
                Err(error)
            }
        }
    }

    fn load(&self, model_id: &str, family: TokenizerFamily) -> Result<TokenizerHandle, DomainError> {
        match family {
            TokenizerFamily::BytePair(encoding) => Ok(TokenizerHandle::BytePair {
                encoding,
                bpe: byte_pair::load_encoding(encoding)?,
            }),
            TokenizerFamily::StandIn => {
                let source = self.source.as_ref().ok_or_else(|| {
                    DomainError::Unavailable(format!(
                        "Model hub is disabled; cannot load stand-in tokenizer '{}'",
                        self.stand_in_repository
                    ))
                })?;
                Ok(TokenizerHandle::Subword {
                    tokenizer: Self::load_subword(source.as_ref(), &self.stand_in_repository)?,
                    approximation: true,
                })
            }
            TokenizerFamily::Hub => match self.source.as_ref() {
                Some(source) => Ok(TokenizerHandle::Subword {
                    tokenizer: Self::load_subword(source.as_ref(), model_id)?,
                    approximation: false,
                }),
                None => {
                    tracing::debug!("Model hub is disabled; using regex tokenizer for {}", model_id);
                    Ok(TokenizerHandle::Regex(self.regex.clone()))
                }
            },
        }
    }

    fn load_subword(
        source: &dyn TokenizerSource,
        repository: &str,
    ) -> Result<Arc<Tokenizer>, DomainError> {
        let bytes = source.fetch_tokenizer_json(repository)?;
        let tokenizer = Tokenizer::from_bytes(&bytes).map_err(|error| {
            DomainError::InvalidData(format!(
                "Tokenizer file for '{}' could not be parsed: {}",
                repository, error
            ))
        })?;

        Ok(Arc::new(tokenizer))
    }
}

impl TokenizerRepository for DispatchingTokenizerRepository {
    fn tokenize(&self, model_id: &str, text: &str) -> Result<TokenizedText, DomainError> {
        self.resolve(model_id)?.tokenize(text)
    }
}
