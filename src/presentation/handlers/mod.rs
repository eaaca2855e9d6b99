pub mod helpers;
pub mod model_handlers;
pub mod page_handlers;
pub mod tokenizer_handlers;
