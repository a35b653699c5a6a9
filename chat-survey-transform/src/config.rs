use std::time::Duration;

use serde::Deserialize;

/// Which kind of reply the model is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    /// One short sentence acknowledging the answer.
    #[default]
    Transition,

    /// A playful, game-like reaction to the question and answer.
    Gamify,
}

/// Settings for a `ChatCompletionTransformer`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransformerConfig {
    /// Full URL of the chat completions endpoint.
    pub api_url: String,

    /// Bearer token, if the endpoint needs one.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name sent with each request.
    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub mode: TransformMode,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Requests taking longer than this fail and the engine falls back.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    60
}

fn default_timeout_secs() -> u64 {
    20
}

impl TransformerConfig {
    /// Create a config for `api_url` with default settings.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: None,
            model: None,
            mode: TransformMode::default(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_mode(mut self, mode: TransformMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs().max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
