//! [`LlmClient`] over async-openai. Works with any OpenAI-compatible chat-completions endpoint.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use tracing::{info, instrument};

use super::config::LlmConfig;
use super::LlmClient;

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// Chat-completions client. The composed prompt is sent as a single user message.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    timeout: Duration,
    masked_key: String,
}

impl OpenAILlmClient {
    /// Builds the client from config. async-openai's retry backoff is disabled: one attempt per question.
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("build HTTP client for LLM")?;
        let no_retry = backoff::ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.clone())
            .with_api_base(config.base_url.clone());
        let client = Client::with_config(openai_config)
            .with_http_client(http)
            .with_backoff(no_retry);

        Ok(Self {
            client: Arc::new(client),
            model: config.model.clone(),
            timeout: config.timeout,
            masked_key: mask_token(&config.api_key),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, prompt))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        info!(
            model = %self.model,
            prompt_len = prompt.len(),
            api_key = %self.masked_key,
            "LLM chat_completion request"
        );

        let messages: Vec<ChatCompletionRequestMessage> =
            vec![ChatCompletionRequestUserMessageArgs::default()
                .content(prompt.to_string())
                .build()?
                .into()];
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .build()?;

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| anyhow::anyhow!("LLM request timed out after {:?}", self.timeout))??;

        if let Some(ref u) = response.usage {
            info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "LLM chat_completion usage"
            );
        }

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        if text.trim().is_empty() {
            anyhow::bail!("Empty response from model");
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token_short_is_fully_hidden() {
        assert_eq!(mask_token(""), "***");
        assert_eq!(mask_token("abcdefghijk"), "***");
    }

    #[test]
    fn test_mask_token_keeps_head_and_tail() {
        assert_eq!(mask_token("AIzaSyABCDEFGHIJ1234"), "AIzaSyA***1234");
    }

    #[test]
    fn test_client_keeps_model() {
        let client = OpenAILlmClient::new(&LlmConfig::new("dummy_key")).unwrap();
        assert_eq!(client.model(), "gemini-1.5-flash");
    }
}
