// Infrastructure layer - implements interfaces defined in the domain layer
pub mod apis;
pub mod config;
pub mod logging;
pub mod repositories;
pub mod tokenizers;
