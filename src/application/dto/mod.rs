pub mod model_dto;
pub mod tokenization_dto;
