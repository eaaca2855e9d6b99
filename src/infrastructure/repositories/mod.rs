pub mod dispatching_tokenizer_repository;
pub mod static_model_catalog_repository;
