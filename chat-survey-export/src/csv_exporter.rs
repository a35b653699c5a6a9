use std::io::Write;

use chat_survey::{AnswerLog, ExportError, Exporter};

/// How entries are laid out in the CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CsvLayout {
    /// One row per entry under a two-column header.
    Long,

    /// Questions as the header row, answers as a single data row.
    Wide,
}

/// Writes an answer log as CSV.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    layout: CsvLayout,
    question_header: String,
    answer_header: String,
}

impl CsvExporter {
    /// Two columns, `question` and `answer`, one row per entry.
    pub fn long() -> Self {
        Self {
            layout: CsvLayout::Long,
            question_header: "question".to_string(),
            answer_header: "answer".to_string(),
        }
    }

    /// One column per question.
    pub fn wide() -> Self {
        Self {
            layout: CsvLayout::Wide,
            ..Self::long()
        }
    }

    /// Set the column headers used by the long layout.
    pub fn with_headers(
        mut self,
        question_header: impl Into<String>,
        answer_header: impl Into<String>,
    ) -> Self {
        self.question_header = question_header.into();
        self.answer_header = answer_header.into();
        self
    }

    fn write_long(&self, log: &AnswerLog, writer: &mut csv::Writer<&mut dyn Write>) -> csv::Result<()> {
        writer.write_record([&self.question_header, &self.answer_header])?;
        for entry in log {
            writer.write_record([&entry.question, &entry.answer])?;
        }
        Ok(())
    }

    fn write_wide(log: &AnswerLog, writer: &mut csv::Writer<&mut dyn Write>) -> csv::Result<()> {
        if log.is_empty() {
            return Ok(());
        }
        writer.write_record(log.iter().map(|entry| entry.question.as_str()))?;
        writer.write_record(log.iter().map(|entry| entry.answer.as_str()))?;
        Ok(())
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::long()
    }
}

impl Exporter for CsvExporter {
    fn export(&self, log: &AnswerLog, out: &mut dyn Write) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_writer(out);
        let written = match self.layout {
            CsvLayout::Long => self.write_long(log, &mut writer),
            CsvLayout::Wide => Self::write_wide(log, &mut writer),
        };
        written.map_err(ExportError::backend)?;
        writer.flush()?;
        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn mime_type(&self) -> &'static str {
        "text/csv"
    }
}
