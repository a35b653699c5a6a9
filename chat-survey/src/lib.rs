//! # chat-survey
//!
//! A chat-style survey engine. Questions are walked one at a time, each bot
//! message optionally enriched by a language model, answers validated and
//! recorded, and the resulting log handed to an exporter.
//!
//! ## Usage
//!
//! ```rust
//! use chat_survey::{Advance, EngineConfig, Question, QuestionKind, StaticSource, SurveyEngine};
//!
//! let source = StaticSource::new().with_questions(
//!     "English",
//!     vec![
//!         Question::new(0, "What is your ID?", QuestionKind::FillBlank),
//!         Question::new(1, "Were you satisfied?", QuestionKind::alternative("Yes", "No")),
//!     ],
//! );
//! let engine = SurveyEngine::new(EngineConfig::default(), source);
//!
//! let mut session = engine.start(&"English".into()).unwrap();
//! engine.ask(&mut session);
//! engine.submit_answer(&mut session, "A-113").unwrap();
//! assert_eq!(
//!     engine.submit_answer(&mut session, "Yes").unwrap(),
//!     Advance::Completed
//! );
//! assert_eq!(engine.export_log(&session).len(), 2);
//! ```
//!
//! ## Collaborators
//!
//! Other crates in this workspace implement the collaborator traits:
//! - `chat-survey-sheets` - `QuestionSource` for spreadsheets and CSV files
//! - `chat-survey-transform` - `ResponseTransformer` over OpenAI-compatible APIs
//! - `chat-survey-export` - `Exporter` for CSV and JSON
//! - `chat-survey-dialoguer` - terminal chat front end

// Re-export all types from chat-survey-types
pub use chat_survey_types::*;

mod config;
pub use config::{DEFAULT_FALLBACK_TEMPLATE, DEFAULT_GREETING, EngineConfig};

mod session;
pub use session::SurveySession;

mod engine;
pub use engine::{Advance, SurveyEngine};

mod routed_source;
pub use routed_source::RoutedSource;

// In-memory collaborators for tests and embedding
mod static_source;
pub use static_source::StaticSource;

mod scripted_transformer;
pub use scripted_transformer::ScriptedTransformer;
