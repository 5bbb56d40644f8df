//! Assistant query client: validates the question, prepends the persona instruction, calls the LLM.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, instrument};

use super::LlmClient;

/// Questions longer than this many characters are rejected without a remote call.
pub const MAX_QUESTION_CHARS: usize = 1000;

pub const DEFAULT_SYSTEM_PROMPT: &str = concat!(
    "You are AgET_TG, a friendly and knowledgeable AI assistant specializing in cryptocurrency, ",
    "blockchain development and web3 technologies. ",
    "Your goal is to educate users and developers, provide accurate information, and assist with crypto-related queries. ",
    "Always respond in a clear, concise, and engaging manner. ",
    "If a user asks about cryptocurrency prices, fetch the latest data. ",
    "For educational questions, explain concepts in simple terms with examples. ",
    "Be proactive in suggesting related topics or resources. ",
    "Remember to maintain a professional yet approachable tone."
);

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("question is empty or longer than 1000 characters ({0} chars)")]
    InvalidLength(usize),

    #[error("generation service failed: {0}")]
    Upstream(#[from] anyhow::Error),
}

impl AssistantError {
    /// Reply text sent to the chat for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            AssistantError::InvalidLength(_) => "Invalid query length.",
            AssistantError::Upstream(_) => "Query processing failed.",
        }
    }
}

/// Answers free-text questions through an [`LlmClient`] with a fixed system instruction.
#[derive(Clone)]
pub struct AssistantClient {
    llm: Arc<dyn LlmClient>,
    system_prompt: String,
}

impl AssistantClient {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_system_prompt_opt(self, prompt: Option<String>) -> Self {
        match prompt {
            Some(p) => self.with_system_prompt(p),
            None => self,
        }
    }

    /// `<system prompt>\n\nUser: <question>`
    pub fn compose_prompt(&self, question: &str) -> String {
        format!("{}\n\nUser: {}", self.system_prompt, question)
    }

    /// Returns the model's answer verbatim.
    #[instrument(skip(self, question))]
    pub async fn ask(&self, question: &str) -> Result<String, AssistantError> {
        let chars = question.chars().count();
        if question.is_empty() || chars > MAX_QUESTION_CHARS {
            info!(chars = chars, "Rejected question with invalid length");
            return Err(AssistantError::InvalidLength(chars));
        }

        self.llm
            .generate(&self.compose_prompt(question))
            .await
            .map_err(|e| {
                error!(error = %e, "LLM query failed");
                AssistantError::Upstream(e)
            })
    }
}
