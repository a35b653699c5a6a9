//! Workbook-backed question source.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use calamine::{Data, Reader, open_workbook_auto};
use chat_survey::{Language, Question, QuestionSource, QuestionSourceError};
use tracing::{debug, info};

use crate::parse_questions;

/// Reads questions from one sheet per language of an xlsx, xls or ods workbook.
///
/// The workbook is opened on every `load`, so edits to the file show up in
/// the next session. Languages without an explicit sheet mapping are looked
/// up by their own name.
#[derive(Debug, Clone)]
pub struct SpreadsheetSource {
    path: PathBuf,
    sheets: HashMap<Language, String>,
}

impl SpreadsheetSource {
    /// Create a source reading the workbook at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheets: HashMap::new(),
        }
    }

    /// Read `language` from the sheet called `sheet`.
    pub fn with_sheet(mut self, language: impl Into<Language>, sheet: impl Into<String>) -> Self {
        self.sheets.insert(language.into(), sheet.into());
        self
    }

    /// Get the workbook path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The sheet name used for `language`.
    pub fn sheet_name<'a>(&'a self, language: &'a Language) -> &'a str {
        self.sheets
            .get(language)
            .map(String::as_str)
            .unwrap_or(language.as_str())
    }
}

impl QuestionSource for SpreadsheetSource {
    fn load(&self, language: &Language) -> Result<Vec<Question>, QuestionSourceError> {
        let sheet = self.sheet_name(language);
        let path = self.path();
        info!(path = %path.display(), sheet, "Loading questions from workbook");

        let mut workbook = open_workbook_auto(path)
            .with_context(|| format!("failed to open workbook {}", path.display()))?;

        if !workbook.sheet_names().iter().any(|name| name == sheet) {
            return Err(QuestionSourceError::MissingSheet(sheet.to_string()));
        }

        let range = workbook
            .worksheet_range(sheet)
            .with_context(|| format!("failed to read sheet '{sheet}'"))?;

        let mut rows = range.rows();
        let Some(header_row) = rows.next() else {
            return Err(QuestionSourceError::Empty);
        };
        let headers: Vec<String> = header_row.iter().map(cell_text).collect();
        debug!(?headers, "Workbook headers");

        parse_questions(&headers, rows.map(|row| row.iter().map(cell_text).collect()))
    }
}

/// Render a cell the way it reads in the spreadsheet.
///
/// Whole floats lose their fraction so a rating typed as `5` stays `"5"`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_mapping_defaults_to_language_name() {
        let source = SpreadsheetSource::new("survey.xlsx").with_sheet("English", "EN");
        let english = Language::new("English");
        let indonesian = Language::new("Indonesian");
        assert_eq!(source.sheet_name(&english), "EN");
        assert_eq!(source.sheet_name(&indonesian), "Indonesian");
    }

    #[test]
    fn cell_text_formats() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("  Yes ".into())), "Yes");
        assert_eq!(cell_text(&Data::Float(5.0)), "5");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Int(3)), "3");
    }

    #[test]
    fn missing_workbook_is_a_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = SpreadsheetSource::new(dir.path().join("nope.xlsx"));
        let err = source.load(&"English".into()).unwrap_err();
        assert!(matches!(err, QuestionSourceError::Backend(_)));
    }
}
