pub mod model_catalog_service;
pub mod tokenization_service;
