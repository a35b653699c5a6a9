use std::io::Write;

use crate::{AnswerLog, ExportError, Language, Question, QuestionSourceError, TransformError};

/// Provider of the ordered question list for a language.
///
/// Implementations must be read-only after construction so one source can
/// serve many sessions at once.
pub trait QuestionSource: Send + Sync {
    /// Load the questions for `language`, in presentation order.
    ///
    /// Question indices must run `0..n` in the returned order.
    fn load(&self, language: &Language) -> Result<Vec<Question>, QuestionSourceError>;
}

impl<S: QuestionSource + ?Sized> QuestionSource for &S {
    fn load(&self, language: &Language) -> Result<Vec<Question>, QuestionSourceError> {
        (**self).load(language)
    }
}

impl<S: QuestionSource + ?Sized> QuestionSource for Box<S> {
    fn load(&self, language: &Language) -> Result<Vec<Question>, QuestionSourceError> {
        (**self).load(language)
    }
}

/// Opaque text-to-text service producing conversational transitions.
///
/// Always optional and fail-open: the engine masks every error.
pub trait ResponseTransformer: Send + Sync {
    /// Produce a reply to `last_answer`.
    ///
    /// # Arguments
    /// * `context` - The bot message the user was answering
    /// * `last_answer` - The user's answer to it
    fn transform(&self, context: &str, last_answer: &str) -> Result<String, TransformError>;
}

impl<T: ResponseTransformer + ?Sized> ResponseTransformer for &T {
    fn transform(&self, context: &str, last_answer: &str) -> Result<String, TransformError> {
        (**self).transform(context, last_answer)
    }
}

impl<T: ResponseTransformer + ?Sized> ResponseTransformer for Box<T> {
    fn transform(&self, context: &str, last_answer: &str) -> Result<String, TransformError> {
        (**self).transform(context, last_answer)
    }
}

/// Serializer for a finished answer log.
pub trait Exporter {
    /// Write `log` to `writer`, entries in submission order.
    fn export(&self, log: &AnswerLog, writer: &mut dyn Write) -> Result<(), ExportError>;

    /// File extension (without the dot) for downloads, e.g. `"csv"`.
    fn file_extension(&self) -> &'static str;

    /// MIME type for downloads, e.g. `"text/csv"`.
    fn mime_type(&self) -> &'static str;
}
