// Tokenizer handles and the per-process cache that owns them
pub mod byte_pair;
pub mod cache;
pub mod handle;
pub mod regex_tokenizer;
