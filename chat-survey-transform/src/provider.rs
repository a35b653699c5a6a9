use chat_survey::{ResponseTransformer, TransformError};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    GAMIFY_SYSTEM_PROMPT, TRANSITION_SYSTEM_PROMPT, TransformMode, TransformerConfig,
    gamify_prompt,
};

/// Error type for chat completion calls.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("Failed to send request: {0}")]
    Request(reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to deserialize response: {0}")]
    Deserialization(reqwest::Error),

    #[error("Response contained no choices")]
    NoChoices,
}

impl From<ProviderError> for TransformError {
    fn from(err: ProviderError) -> Self {
        TransformError::backend(err)
    }
}

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

/// A transformer backed by an OpenAI-compatible chat completions endpoint.
///
/// The underlying client is blocking; the engine calls it synchronously and
/// masks any failure, including timeouts.
#[derive(Clone, Debug)]
pub struct ChatCompletionTransformer {
    client: Client,
    config: TransformerConfig,
}

impl ChatCompletionTransformer {
    /// Create a new transformer from `config`.
    pub fn new(config: TransformerConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ProviderError::ClientBuild)?;
        Ok(Self { client, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    fn messages(&self, context: &str, last_answer: &str) -> Vec<ChatMessage> {
        match self.config.mode {
            TransformMode::Transition => vec![
                ChatMessage::new("system", TRANSITION_SYSTEM_PROMPT),
                ChatMessage::new("user", last_answer),
            ],
            TransformMode::Gamify => vec![
                ChatMessage::new("system", GAMIFY_SYSTEM_PROMPT),
                ChatMessage::new("user", gamify_prompt(context, last_answer)),
            ],
        }
    }

    /// Send one chat completion request and return the first choice's content.
    pub fn complete(&self, context: &str, last_answer: &str) -> Result<String, ProviderError> {
        let messages = self.messages(context, last_answer);

        let request_body = ChatRequest {
            messages,
            model: self.config.model.as_deref(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stream: false,
        };

        let mut request_builder = self.client.post(&self.config.api_url);
        if let Some(key) = &self.config.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        debug!(url = %self.config.api_url, mode = ?self.config.mode, "--> Sending chat completion request");
        let response = request_builder
            .json(&request_body)
            .send()
            .map_err(ProviderError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .map_err(ProviderError::Deserialization)?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ProviderError::NoChoices)?;

        // Completion-style models tend to echo the gamify prompt back.
        let reply = match self.config.mode {
            TransformMode::Gamify => content.replace(&gamify_prompt(context, last_answer), ""),
            TransformMode::Transition => content,
        }
        .trim()
        .to_string();
        debug!(%reply, "<-- Chat completion reply");
        Ok(reply)
    }
}

impl ResponseTransformer for ChatCompletionTransformer {
    fn transform(&self, context: &str, last_answer: &str) -> Result<String, TransformError> {
        let reply = self.complete(context, last_answer)?;
        if reply.is_empty() {
            return Err(TransformError::Empty);
        }
        Ok(reply)
    }
}
