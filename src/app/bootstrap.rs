use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::repositories::model_catalog_repository::ModelCatalogRepository;
use crate::domain::repositories::tokenizer_repository::TokenizerRepository;
use crate::infrastructure::apis::hub_tokenizer_source::{HfHubTokenizerSource, TokenizerSource};
use crate::infrastructure::config::ServiceConfig;
use crate::infrastructure::repositories::dispatching_tokenizer_repository::DispatchingTokenizerRepository;
use crate::infrastructure::repositories::static_model_catalog_repository::StaticModelCatalogRepository;

pub(super) struct AppRepositories {
    pub tokenizer_repository: Arc<dyn TokenizerRepository>,
    pub model_catalog_repository: Arc<dyn ModelCatalogRepository>,
}

pub(super) fn build_repositories(config: &ServiceConfig) -> Result<AppRepositories, DomainError> {
    let source: Option<Arc<dyn TokenizerSource>> = if config.hub.enabled {
        Some(Arc::new(HfHubTokenizerSource::new(
            config.hub.cache_dir.clone(),
            config.hub.token.clone(),
        )?))
    } else {
        tracing::warn!("Model hub disabled; non-GPT models use the regex tokenizer");
        None
    };

    let tokenizer_repository: Arc<dyn TokenizerRepository> =
        Arc::new(DispatchingTokenizerRepository::new(
            source,
            config.stand_in_tokenizer.clone(),
            config.fallback,
        )?);

    let model_catalog_repository: Arc<dyn ModelCatalogRepository> =
        Arc::new(StaticModelCatalogRepository::new(config.models.clone()));

    Ok(AppRepositories {
        tokenizer_repository,
        model_catalog_repository,
    })
}

#[cfg(test)]
mod tests {
    use super::build_repositories;
    use crate::infrastructure::config::ServiceConfig;

    #[test]
    fn offline_config_builds_without_hub_client() {
        let mut config = ServiceConfig::default();
        config.hub.enabled = false;

        let repositories = build_repositories(&config).expect("repositories should build");

        assert_eq!(
            repositories.model_catalog_repository.list_models(),
            config.models
        );
        let tokenized = repositories
            .tokenizer_repository
            .tokenize("microsoft/phi-4", "Hello, world!")
            .expect("offline hub model should use regex");
        assert_eq!(tokenized.count(), 4);
    }
}
