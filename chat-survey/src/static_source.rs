//! In-memory question source.
//!
//! `StaticSource` serves question lists that are already built in code. It
//! is useful for tests and for embedding a survey without any files.
//!
//! # Example
//!
//! ```rust
//! use chat_survey::{Question, QuestionKind, QuestionSource, StaticSource};
//!
//! let source = StaticSource::new()
//!     .with_questions("English", vec![Question::new(0, "Your ID?", QuestionKind::FillBlank)])
//!     .with_questions("Indonesian", vec![Question::new(0, "ID Anda?", QuestionKind::FillBlank)]);
//!
//! assert_eq!(source.load(&"Indonesian".into()).unwrap()[0].text(), "ID Anda?");
//! ```

use std::collections::HashMap;

use crate::{Language, Question, QuestionSource, QuestionSourceError};

/// A question source backed by a map of language to question list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    questions: HashMap<Language, Vec<Question>>,
}

impl StaticSource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self {
            questions: HashMap::new(),
        }
    }

    /// Add the question list for a language.
    pub fn with_questions(
        mut self,
        language: impl Into<Language>,
        questions: Vec<Question>,
    ) -> Self {
        self.questions.insert(language.into(), questions);
        self
    }
}

impl QuestionSource for StaticSource {
    fn load(&self, language: &Language) -> Result<Vec<Question>, QuestionSourceError> {
        self.questions
            .get(language)
            .cloned()
            .ok_or_else(|| QuestionSourceError::MissingSheet(language.to_string()))
    }
}
