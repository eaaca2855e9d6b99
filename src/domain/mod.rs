// Domain layer - core models and the repository seams the service depends on
pub mod errors;
pub mod models;
pub mod repositories;
