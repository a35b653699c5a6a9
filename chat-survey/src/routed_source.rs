use std::collections::HashMap;

use crate::{Language, Question, QuestionSource, QuestionSourceError};

/// A question source that hands each language to its own backing source.
///
/// Lets one survey mix storage, e.g. a workbook sheet for one language and
/// a CSV file for another.
#[derive(Default)]
pub struct RoutedSource {
    routes: HashMap<Language, Box<dyn QuestionSource>>,
}

impl RoutedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `language` from `source`, replacing any earlier route.
    pub fn with_route(
        mut self,
        language: impl Into<Language>,
        source: impl QuestionSource + 'static,
    ) -> Self {
        self.routes.insert(language.into(), Box::new(source));
        self
    }
}

impl std::fmt::Debug for RoutedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutedSource")
            .field("languages", &self.routes.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl QuestionSource for RoutedSource {
    fn load(&self, language: &Language) -> Result<Vec<Question>, QuestionSourceError> {
        self.routes
            .get(language)
            .ok_or_else(|| QuestionSourceError::MissingSheet(language.to_string()))?
            .load(language)
    }
}
