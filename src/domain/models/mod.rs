pub mod model_descriptor;
pub mod tokenization;
