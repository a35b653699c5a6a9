//! # chat-survey-dialoguer
//!
//! Terminal chat front end for chat-survey.
//!
//! Bot messages are printed as chat lines and each answer is collected with
//! the `dialoguer` control that fits the question kind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chat_survey::{EngineConfig, Question, QuestionKind, StaticSource, SurveyEngine};
//! use chat_survey_dialoguer::ChatWizard;
//!
//! fn main() -> anyhow::Result<()> {
//!     let source = StaticSource::new().with_questions(
//!         "English",
//!         vec![Question::new(0, "How was your call?", QuestionKind::rating())],
//!     );
//!     let engine = SurveyEngine::new(EngineConfig::new(["English"]), source);
//!
//!     let session = ChatWizard::new().run(&engine)?;
//!     println!("{} answers", engine.export_log(&session).len());
//!     Ok(())
//! }
//! ```

mod wizard;

pub use wizard::{ChatWizard, WizardError, format_message};
