/// The fixed five-point scale offered by every rating question.
pub const RATING_SCALE: [&str; 5] = ["1", "2", "3", "4", "5"];

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Position in the question list, starting at 0.
    index: usize,

    /// Optional lead-in shown before the question body.
    prompt: Option<String>,

    /// The question body.
    text: String,

    /// The kind of question (determines the input control and accepted answers).
    kind: QuestionKind,
}

impl Question {
    /// Create a new question.
    pub fn new(index: usize, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            index,
            prompt: None,
            text: text.into(),
            kind,
        }
    }

    /// Set the lead-in text.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        self.prompt = if prompt.trim().is_empty() {
            None
        } else {
            Some(prompt)
        };
        self
    }

    /// Get the 0-based position of this question.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the lead-in text, if any.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Get the question body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// The options a user may pick from. Empty for fill-in questions.
    pub fn options(&self) -> &[String] {
        self.kind.options()
    }

    /// The lead-in and body joined for display.
    pub fn display_text(&self) -> String {
        match &self.prompt {
            Some(prompt) => format!("{} {}", prompt.trim(), self.text.trim()),
            None => self.text.trim().to_string(),
        }
    }
}

/// The kind of question, carrying its own option data.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Pick one of exactly two options.
    Alternative(AlternativeQuestion),

    /// Free-text answer, no options.
    FillBlank,

    /// Pick a point on the fixed five-point scale.
    Rating(RatingQuestion),
}

impl QuestionKind {
    /// Shorthand for an alternative question.
    pub fn alternative(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::Alternative(AlternativeQuestion::new(first, second))
    }

    /// Shorthand for a rating question on the standard scale.
    pub fn rating() -> Self {
        Self::Rating(RatingQuestion::new())
    }

    /// The options belonging to this kind.
    pub fn options(&self) -> &[String] {
        match self {
            Self::Alternative(alt) => alt.options(),
            Self::FillBlank => &[],
            Self::Rating(rating) => rating.scale(),
        }
    }

    /// The spelling used in the `type` column of a question sheet.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Alternative(_) => "alternative",
            Self::FillBlank => "fill_blank",
            Self::Rating(_) => "rating",
        }
    }

    /// The number of options a kind with this type name requires.
    ///
    /// Returns `None` for unknown type names.
    pub fn expected_options(type_name: &str) -> Option<usize> {
        match normalize_type_name(type_name).as_str() {
            "alternative" => Some(2),
            "fill_blank" => Some(0),
            "rating" => Some(RATING_SCALE.len()),
            _ => None,
        }
    }

    /// Build a kind from its sheet spelling and the row's option cells.
    ///
    /// Returns `None` for unknown type names, or when an alternative has fewer
    /// than two options. Rating questions always use the fixed scale.
    pub fn from_type_name(type_name: &str, options: &[String]) -> Option<Self> {
        match normalize_type_name(type_name).as_str() {
            "alternative" => match options {
                [first, second, ..] => Some(Self::alternative(first.clone(), second.clone())),
                _ => None,
            },
            "fill_blank" => Some(Self::FillBlank),
            "rating" => Some(Self::rating()),
            _ => None,
        }
    }
}

/// Lowercase, trim, and fold the accepted spellings of `fill_blank`.
fn normalize_type_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase().replace([' ', '-'], "_");
    match lowered.as_str() {
        "fillblank" | "fill_in_blank" | "fill_in_the_blank" => "fill_blank".to_string(),
        _ => lowered,
    }
}

/// Configuration for an alternative question (exactly two options).
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeQuestion {
    options: [String; 2],
}

impl AlternativeQuestion {
    /// Create a new alternative question with the two options in display order.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            options: [first.into(), second.into()],
        }
    }

    /// Get the options.
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

/// Configuration for a rating question.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingQuestion {
    scale: Vec<String>,
}

impl RatingQuestion {
    /// Create a rating question on the fixed `1..5` scale.
    pub fn new() -> Self {
        Self {
            scale: RATING_SCALE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Get the scale labels, lowest first.
    pub fn scale(&self) -> &[String] {
        &self.scale
    }
}

impl Default for RatingQuestion {
    fn default() -> Self {
        Self::new()
    }
}
