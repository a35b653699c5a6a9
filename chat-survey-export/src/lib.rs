//! Exporters that write a finished session's answer log.
//!
//! ```
//! use chat_survey::{AnswerEntry, AnswerLog, Exporter};
//! use chat_survey_export::CsvExporter;
//!
//! let log = AnswerLog::from(vec![AnswerEntry::new("Your ID?", "A-113")]);
//! let mut out = Vec::new();
//! CsvExporter::long().export(&log, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "question,answer\nYour ID?,A-113\n");
//! ```

mod csv_exporter;
mod format;
mod json_exporter;

pub use csv_exporter::CsvExporter;
pub use format::{ExportFormat, export_to_path};
pub use json_exporter::JsonExporter;
