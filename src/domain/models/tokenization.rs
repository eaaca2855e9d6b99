use serde::{Deserialize, Serialize};

/// Byte-level BPE tables shipped with tiktoken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BytePairEncoding {
    Cl100kBase,
    P50kBase,
}

impl BytePairEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            BytePairEncoding::Cl100kBase => "cl100k_base",
            BytePairEncoding::P50kBase => "p50k_base",
        }
    }
}

/// Which kind of tokenizer serves a model id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerFamily {
    BytePair(BytePairEncoding),
    /// Loaded from the configured stand-in repository; results are approximate.
    StandIn,
    /// The model id itself names a hub repository.
    Hub,
}

/// Prefix routes, first match wins. Ids matching none of them go to the hub.
const ROUTES: &[(&str, TokenizerFamily)] = &[
    ("gpt-4", TokenizerFamily::BytePair(BytePairEncoding::Cl100kBase)),
    ("gpt-3.5", TokenizerFamily::BytePair(BytePairEncoding::Cl100kBase)),
    ("gpt-", TokenizerFamily::BytePair(BytePairEncoding::P50kBase)),
    ("claude-", TokenizerFamily::StandIn),
];

impl TokenizerFamily {
    pub fn classify(model_id: &str) -> Self {
        ROUTES
            .iter()
            .find(|(prefix, _)| model_id.starts_with(prefix))
            .map(|(_, family)| *family)
            .unwrap_or(TokenizerFamily::Hub)
    }
}

/// What to do when a hub-backed tokenizer cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Report every load failure.
    #[default]
    Never,
    /// Substitute the regex tokenizer when the model is unknown or malformed,
    /// but still report transient failures.
    UnknownModel,
    /// Substitute the regex tokenizer on any load failure.
    AnyFailure,
}

impl FallbackPolicy {
    pub fn allows(&self, permanent_failure: bool) -> bool {
        match self {
            FallbackPolicy::Never => false,
            FallbackPolicy::UnknownModel => permanent_failure,
            FallbackPolicy::AnyFailure => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizedText {
    pub tokens: Vec<String>,
    pub is_approximation: bool,
}

impl TokenizedText {
    pub fn count(&self) -> usize {
        self.tokens.len()
    }
}
