//! Core types for the chat-survey crate.
//!
//! This crate provides the foundational types for a chat-style survey:
//! - `Question` and `QuestionKind` - Individual questions and their input types
//! - `Language` - The locale key that selects a question set
//! - `AnswerEntry` and `AnswerLog` - The recorded question/answer pairs
//! - `ChatMessage` - One line of the rendered conversation
//! - `QuestionSource`, `ResponseTransformer` and `Exporter` traits - The collaborators
//!   the survey engine talks to

mod language;
pub use language::Language;

mod question;
pub use question::{AlternativeQuestion, Question, QuestionKind, RATING_SCALE, RatingQuestion};

mod answer_log;
pub use answer_log::{AnswerEntry, AnswerLog};

mod chat;
pub use chat::{ChatMessage, Speaker, SurveyState};

mod error;
pub use error::{ExportError, InvalidAnswer, QuestionSourceError, SurveyError, TransformError};

mod traits;
pub use traits::{Exporter, QuestionSource, ResponseTransformer};
