pub mod hub_tokenizer_source;
