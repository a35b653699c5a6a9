//! CSV-backed question source.

use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use chat_survey::{Language, Question, QuestionSource, QuestionSourceError};
use tracing::info;

use crate::parse_questions;

/// Reads questions from one CSV file per language.
#[derive(Debug, Clone, Default)]
pub struct CsvSource {
    files: HashMap<Language, PathBuf>,
}

impl CsvSource {
    /// Create a source with no files.
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Read `language` from the CSV file at `path`.
    pub fn with_file(mut self, language: impl Into<Language>, path: impl Into<PathBuf>) -> Self {
        self.files.insert(language.into(), path.into());
        self
    }
}

impl QuestionSource for CsvSource {
    fn load(&self, language: &Language) -> Result<Vec<Question>, QuestionSourceError> {
        let path = self
            .files
            .get(language)
            .ok_or_else(|| QuestionSourceError::MissingSheet(language.to_string()))?;
        info!(path = %path.display(), %language, "Loading questions from CSV");

        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        read_questions(file)
    }
}

/// Parse a CSV question table from any reader.
///
/// Rows may be shorter than the header; missing cells read as blank.
pub fn read_questions(reader: impl Read) -> Result<Vec<Question>, QuestionSourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .context("failed to read CSV header")?
        .iter()
        .map(String::from)
        .collect();

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|record| record.map(|r| r.iter().map(String::from).collect()))
        .collect::<Result<_, _>>()
        .context("failed to read CSV rows")?;

    parse_questions(&headers, rows)
}
