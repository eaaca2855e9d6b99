use serde::{Deserialize, Serialize};

use crate::domain::models::tokenization::TokenizedText;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CountTokensRequestDto {
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CountTokensResponseDto {
    pub count: usize,
    pub tokens: Vec<String>,
    pub is_approximation: bool,
}

impl From<TokenizedText> for CountTokensResponseDto {
    fn from(tokenized: TokenizedText) -> Self {
        Self {
            count: tokenized.count(),
            tokens: tokenized.tokens,
            is_approximation: tokenized.is_approximation,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatusDto {
    pub status: String,
}

impl ServiceStatusDto {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
