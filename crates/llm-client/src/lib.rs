//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait, an OpenAI-compatible implementation ([`OpenAILlmClient`], pointed at
//! Gemini's OpenAI endpoint by default) and the [`AssistantClient`] that validates questions and
//! prepends the AgET_TG system instruction.

use anyhow::Result;
use async_trait::async_trait;

mod assistant;
mod config;
mod openai_llm;

pub use assistant::{AssistantClient, AssistantError, DEFAULT_SYSTEM_PROMPT, MAX_QUESTION_CHARS};
pub use config::{LlmConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use openai_llm::{mask_token, OpenAILlmClient};

/// Single-shot text generation: one composed prompt in, generated text out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
