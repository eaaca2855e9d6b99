use std::sync::Arc;

use tiktoken_rs::CoreBPE;

use crate::domain::errors::DomainError;
use crate::domain::models::tokenization::BytePairEncoding;

pub fn load_encoding(encoding: BytePairEncoding) -> Result<Arc<CoreBPE>, DomainError> {
    let bpe = match encoding {
        BytePairEncoding::Cl100kBase => tiktoken_rs::cl100k_base(),
        BytePairEncoding::P50kBase => tiktoken_rs::p50k_base(),
    }
    .map_err(|error| {
        DomainError::InternalError(format!(
            "Failed to initialize byte pair table '{}': {}",
            encoding.name(),
            error
        ))
    })?;

    Ok(Arc::new(bpe))
}

/// Encode `text` and render every token id on its own.
pub fn tokenize(bpe: &CoreBPE, text: &str) -> Vec<String> {
    bpe._decode_native_and_split(bpe.encode_ordinary(text))
        .map(render_token_bytes)
        .collect()
}

/// A single token may hold only part of a multi-byte character. Such tokens
/// are shown as escaped bytes instead of failing the request.
pub fn render_token_bytes(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => error.as_bytes().escape_ascii().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{load_encoding, render_token_bytes, tokenize};
    use crate::domain::models::tokenization::BytePairEncoding;

    #[test]
    fn valid_utf8_passes_through() {
        assert_eq!(render_token_bytes(" world".as_bytes().to_vec()), " world");
        assert_eq!(render_token_bytes("é".as_bytes().to_vec()), "é");
    }

    #[test]
    fn partial_character_is_escaped() {
        // First two bytes of U+4F60
        assert_eq!(render_token_bytes(vec![0xe4, 0xbd]), "\\xe4\\xbd");
    }

    #[test]
    fn escaped_form_keeps_ascii_bytes_readable() {
        assert_eq!(render_token_bytes(vec![b'a', 0xff]), "a\\xff");
    }

    #[test]
    fn cl100k_tokens_concatenate_back_to_ascii_input() {
        let bpe = load_encoding(BytePairEncoding::Cl100kBase).expect("cl100k should load");
        let text = "The quick brown fox jumps over the lazy dog.";
        let tokens = tokenize(&bpe, text);

        assert!(tokens.len() > 1);
        assert_eq!(tokens.concat(), text);
    }

    #[test]
    fn p50k_table_loads() {
        let bpe = load_encoding(BytePairEncoding::P50kBase).expect("p50k should load");
        let tokens = tokenize(&bpe, "Hi");

        assert_eq!(tokens.concat(), "Hi");
    }

    #[test]
    fn multibyte_input_never_fails() {
        let bpe = load_encoding(BytePairEncoding::Cl100kBase).expect("cl100k should load");
        let tokens = tokenize(&bpe, "🦀 你好");

        assert!(!tokens.is_empty());
        assert!(tokens.iter().all(|token| !token.is_empty()));
    }

    #[test]
    fn split_emoji_comes_back_as_escaped_bytes() {
        let bpe = load_encoding(BytePairEncoding::Cl100kBase).expect("cl100k should load");
        let tokens = tokenize(&bpe, "🦀");

        assert!(tokens.len() > 1, "crab emoji spans several cl100k tokens");
        assert!(
            tokens.iter().any(|token| token.starts_with("\\x")),
            "expected an escaped partial character in {tokens:?}"
        );
    }
}
