use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LLMConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            max_tokens: Some(2000),
            temperature: Some(0.7),
        }
    }
}

pub const PLACEHOLDER_API_KEY: &str = "your_openai_api_key_here";
pub const API_KEY_PREFIX: &str = "sk-";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyStatus {
    Valid,
    InvalidOrMissing,
}

impl LLMConfig {
    /// Judges the credential without touching the network.
    pub fn key_status(&self) -> KeyStatus {
        match self.api_key.as_deref().map(str::trim) {
            Some(key)
                if !key.is_empty()
                    && key != PLACEHOLDER_API_KEY
                    && key.starts_with(API_KEY_PREFIX) =>
            {
                KeyStatus::Valid
            }
            _ => KeyStatus::InvalidOrMissing,
        }
    }

    pub fn has_valid_key(&self) -> bool {
        self.key_status() == KeyStatus::Valid
    }
}
