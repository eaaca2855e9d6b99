use std::fs;
use std::path::PathBuf;

use hf_hub::api::sync::{Api, ApiBuilder, ApiError};

use crate::domain::errors::DomainError;

const TOKENIZER_FILE: &str = "tokenizer.json";

/// Fetches serialized `tokenizer.json` files by repository name.
pub trait TokenizerSource: Send + Sync {
    fn fetch_tokenizer_json(&self, repository: &str) -> Result<Vec<u8>, DomainError>;
}

/// Hugging Face Hub backed source. Downloads are cached on disk by `hf-hub`,
/// so a restart only pays the network cost for new repositories.
pub struct HfHubTokenizerSource {
    api: Api,
}

impl HfHubTokenizerSource {
    pub fn new(cache_dir: Option<PathBuf>, token: Option<String>) -> Result<Self, DomainError> {
        let mut builder = ApiBuilder::new().with_progress(false).with_token(token);
        if let Some(cache_dir) = cache_dir {
            builder = builder.with_cache_dir(cache_dir);
        }

        let api = builder.build().map_err(|error| {
            DomainError::InternalError(format!("Failed to initialize model hub client: {}", error))
        })?;

        Ok(Self { api })
    }

    fn map_hub_error(repository: &str, error: ApiError) -> DomainError {
        // The hub answers 401 for repositories that do not exist when the
        // request is anonymous, so both codes mean "no such model".
        let missing = matches!(
            &error,
            ApiError::RequestError(request) if matches!(**request, ureq::Error::Status(404 | 401, _))
        );

        if missing {
            DomainError::NotFound(format!(
                "Tokenizer repository '{}' was not found: {}",
                repository, error
            ))
        } else {
            DomainError::Unavailable(format!(
                "Failed to download tokenizer for '{}': {}",
                repository, error
            ))
        }
    }
}

impl TokenizerSource for HfHubTokenizerSource {
    fn fetch_tokenizer_json(&self, repository: &str) -> Result<Vec<u8>, DomainError> {
        validate_repository_id(repository)?;

        let path = self
            .api
            .model(repository.to_string())
            .get(TOKENIZER_FILE)
            .map_err(|error| Self::map_hub_error(repository, error))?;

        fs::read(&path).map_err(|error| {
            DomainError::Unavailable(format!(
                "Failed to read cached tokenizer '{}': {}",
                path.display(),
                error
            ))
        })
    }
}

/// Accepts `name` or `owner/name` where each segment is made of ASCII
/// letters, digits, `.`, `_` or `-`.
pub fn validate_repository_id(repository: &str) -> Result<(), DomainError> {
    let segments = repository.split('/').collect::<Vec<_>>();
    let valid_segment = |segment: &&str| {
        !segment.is_empty()
            && *segment != "."
            && *segment != ".."
            && segment
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'))
    };

    if segments.len() > 2 || !segments.iter().all(valid_segment) {
        return Err(DomainError::InvalidData(format!(
            "'{}' is not a valid tokenizer repository name",
            repository
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use hf_hub::api::sync::ApiError;

    use super::{validate_repository_id, HfHubTokenizerSource};
    use crate::domain::errors::DomainError;

    #[test]
    fn accepts_plain_and_namespaced_repositories() {
        assert!(validate_repository_id("gpt2").is_ok());
        assert!(validate_repository_id("microsoft/phi-4").is_ok());
        assert!(validate_repository_id("Qwen/Qwen2.5-Coder-32B-Instruct").is_ok());
    }

    #[test]
    fn rejects_malformed_repositories() {
        for repository in ["", "/", "a/b/c", "owner/", "../etc", "has space", "emoji/🦀"] {
            assert!(
                matches!(
                    validate_repository_id(repository),
                    Err(DomainError::InvalidData(_))
                ),
                "{repository:?} should be rejected"
            );
        }
    }

    fn status_error(code: u16, text: &str) -> ApiError {
        let response = ureq::Response::new(code, text, "").expect("response should parse");
        ApiError::RequestError(Box::new(ureq::Error::Status(code, response)))
    }

    #[test]
    fn hub_status_codes_map_to_not_found() {
        for code in [404, 401] {
            let error = HfHubTokenizerSource::map_hub_error("nobody/nothing", status_error(code, "Not Found"));
            assert!(matches!(error, DomainError::NotFound(_)), "status {code}");
        }
    }

    #[test]
    fn transport_failures_are_transient() {
        let error = HfHubTokenizerSource::map_hub_error(
            "microsoft/phi-4",
            ApiError::IoError(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused")),
        );
        assert!(matches!(error, DomainError::Unavailable(_)));

        let error = HfHubTokenizerSource::map_hub_error("microsoft/phi-4", status_error(503, "Service Unavailable"));
        assert!(matches!(error, DomainError::Unavailable(_)));
    }

    #[test]
    fn status_digits_in_repository_name_do_not_mean_missing() {
        let error = HfHubTokenizerSource::map_hub_error(
            "acme/model-404b",
            ApiError::IoError(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "https://huggingface.co/acme/model-404b/resolve/main/tokenizer.json: Not Found in proxy",
            )),
        );
        assert!(matches!(error, DomainError::Unavailable(_)));
    }
}
