use crate::Language;

/// Error type for survey engine operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// `start` was called with a language outside the configured set.
    #[error("Unsupported language '{language}' (configured: {})", join(supported))]
    UnsupportedLanguage {
        language: Language,
        supported: Vec<Language>,
    },

    /// The question set could not be loaded.
    #[error("Failed to load questions: {0}")]
    QuestionSource(#[from] QuestionSourceError),

    /// The answer does not fit the current question. The session is unchanged.
    #[error("Invalid answer: {0}")]
    InvalidAnswer(#[from] InvalidAnswer),

    /// The session has already answered every question.
    #[error("Survey is already complete")]
    AlreadyComplete,
}

impl SurveyError {
    /// Check if the caller can re-prompt the same question and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidAnswer(_))
    }
}

fn join(languages: &[Language]) -> String {
    languages
        .iter()
        .map(Language::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Why an answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAnswer {
    #[error("an answer is required")]
    Empty,

    #[error("'{answer}' is not one of: {}", options.join(", "))]
    NotAnOption {
        answer: String,
        options: Vec<String>,
    },
}

/// Error type for loading a question set.
#[derive(Debug, thiserror::Error)]
pub enum QuestionSourceError {
    #[error("No question sheet for language '{0}'")]
    MissingSheet(String),

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Row {row}: missing value in column '{column}'")]
    MissingValue { row: usize, column: String },

    #[error("Row {row}: unknown question type '{value}'")]
    UnknownType { row: usize, value: String },

    #[error("The question sheet has no questions")]
    Empty,

    /// Reader-specific failure (I/O, malformed workbook, bad CSV).
    #[error("Source error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl QuestionSourceError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

/// Error type for response transformers.
///
/// The engine never surfaces this to users; it logs it and falls back to a template.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Transformer returned an empty response")]
    Empty,

    #[error("Transformer error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl TransformError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

/// Error type for answer log exporters.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl ExportError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}
