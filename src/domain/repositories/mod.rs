pub mod model_catalog_repository;
pub mod tokenizer_repository;
