use std::sync::Arc;

use crate::application::dto::model_dto::ModelDto;
use crate::domain::repositories::model_catalog_repository::ModelCatalogRepository;

/// Service for listing the models offered to callers
pub struct ModelCatalogService {
    model_catalog_repository: Arc<dyn ModelCatalogRepository>,
}

impl ModelCatalogService {
    pub fn new(model_catalog_repository: Arc<dyn ModelCatalogRepository>) -> Self {
        Self {
            model_catalog_repository,
        }
    }

    pub fn list_models(&self) -> Vec<ModelDto> {
        self.model_catalog_repository
            .list_models()
            .into_iter()
            .map(ModelDto::from)
            .collect()
    }
}
