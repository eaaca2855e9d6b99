use crate::domain::models::model_descriptor::ModelDescriptor;

pub trait ModelCatalogRepository: Send + Sync {
    fn list_models(&self) -> Vec<ModelDescriptor>;
}
