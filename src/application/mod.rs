// Application layer - request validation and orchestration over domain seams
pub mod dto;
pub mod errors;
pub mod services;
