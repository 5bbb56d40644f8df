//! LLM configuration for the OpenAI-compatible generation endpoint.

use std::time::Duration;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Overrides [`crate::DEFAULT_SYSTEM_PROMPT`] when set.
    pub system_prompt: Option<String>,
    /// Deadline for one generation request, including connection setup.
    pub timeout: Duration,
}

impl LlmConfig {
    /// Config with Gemini defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            system_prompt: None,
            timeout: Duration::from_secs(10),
        }
    }
}
