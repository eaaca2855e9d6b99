use std::sync::Arc;

use regex::Regex;

use crate::domain::errors::DomainError;

/// Runs of word characters, or any single character that is neither a word
/// character nor whitespace.
const WORD_OR_PUNCTUATION_PATTERN: &str = r"\w+|[^\w\s]";

/// Last-resort tokenizer used when no real vocabulary is available.
#[derive(Clone)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    pub fn new() -> Result<Self, DomainError> {
        let pattern = Regex::new(WORD_OR_PUNCTUATION_PATTERN).map_err(|error| {
            DomainError::InternalError(format!("Failed to compile fallback tokenizer pattern: {}", error))
        })?;

        Ok(Self {
            pattern: Arc::new(pattern),
        })
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|found| found.as_str().to_string())
            .collect()
    }
}
