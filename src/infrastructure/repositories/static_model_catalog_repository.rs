use crate::domain::models::model_descriptor::ModelDescriptor;
use crate::domain::repositories::model_catalog_repository::ModelCatalogRepository;

/// Model list fixed at startup.
pub struct StaticModelCatalogRepository {
    models: Vec<ModelDescriptor>,
}

impl StaticModelCatalogRepository {
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self { models }
    }
}

impl Default for StaticModelCatalogRepository {
    fn default() -> Self {
        Self::new(ModelDescriptor::defaults())
    }
}

impl ModelCatalogRepository for StaticModelCatalogRepository {
    fn list_models(&self) -> Vec<ModelDescriptor> {
        self.models.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::StaticModelCatalogRepository;
    use crate::domain::models::model_descriptor::ModelDescriptor;
    use crate::domain::repositories::model_catalog_repository::ModelCatalogRepository;

    #[test]
    fn lists_models_in_configured_order() {
        let repository = StaticModelCatalogRepository::new(vec![
            ModelDescriptor::new("b", "B"),
            ModelDescriptor::new("a", "A"),
        ]);

        let ids = repository
            .list_models()
            .into_iter()
            .map(|model| model.id)
            .collect::<Vec<_>>();

        assert_eq!(ids, vec!["b", "a"]);
    }
}
