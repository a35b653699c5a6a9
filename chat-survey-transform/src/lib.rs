//! # chat-survey-transform
//!
//! A `ResponseTransformer` that asks a language model for the bot's reply
//! to the user's last answer.
//!
//! Any OpenAI-compatible `/chat/completions` endpoint works (OpenAI, Ollama,
//! llama.cpp server, vLLM, ...). Two modes are available:
//! - `TransformMode::Transition` - a short acknowledgement before the next question
//! - `TransformMode::Gamify` - a playful, game-like take on the answer
//!
//! ## Example
//!
//! ```rust,ignore
//! use chat_survey::{EngineConfig, StaticSource, SurveyEngine};
//! use chat_survey_transform::{ChatCompletionTransformer, TransformerConfig};
//!
//! let transformer = ChatCompletionTransformer::new(
//!     TransformerConfig::new("http://localhost:11434/v1/chat/completions").with_model("llama3"),
//! )?;
//! let engine = SurveyEngine::new(EngineConfig::default(), StaticSource::new())
//!     .with_transformer(transformer);
//! ```

mod config;
pub use config::{TransformMode, TransformerConfig};

mod prompts;
pub use prompts::{GAMIFY_SYSTEM_PROMPT, TRANSITION_SYSTEM_PROMPT, gamify_prompt};

mod provider;
pub use provider::{ChatCompletionTransformer, ProviderError};
