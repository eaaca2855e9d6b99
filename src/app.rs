use std::sync::Arc;

use crate::application::services::model_catalog_service::ModelCatalogService;
use crate::application::services::tokenization_service::TokenizationService;
use crate::domain::errors::DomainError;
use crate::domain::repositories::model_catalog_repository::ModelCatalogRepository;
use crate::domain::repositories::tokenizer_repository::TokenizerRepository;
use crate::infrastructure::config::ServiceConfig;

mod bootstrap;

pub struct AppState {
    pub tokenization_service: Arc<TokenizationService>,
    pub model_catalog_service: Arc<ModelCatalogService>,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> Result<Self, DomainError> {
        tracing::info!(
            "Initializing token counter (hub enabled: {}, fallback: {:?})",
            config.hub.enabled,
            config.fallback
        );

        let repositories = bootstrap::build_repositories(config)?;
        let state = Self::from_repositories(
            repositories.tokenizer_repository,
            repositories.model_catalog_repository,
        );

        tracing::info!("Application initialized successfully");
        Ok(state)
    }

    pub fn from_repositories(
        tokenizer_repository: Arc<dyn TokenizerRepository>,
        model_catalog_repository: Arc<dyn ModelCatalogRepository>,
    ) -> Self {
        Self {
            tokenization_service: Arc::new(TokenizationService::new(tokenizer_repository)),
            model_catalog_service: Arc::new(ModelCatalogService::new(model_catalog_repository)),
        }
    }
}
