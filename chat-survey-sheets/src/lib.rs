//! # chat-survey-sheets
//!
//! Question sources for chat-survey that read tabular question sheets.
//!
//! A question sheet has a header row and one question per data row:
//!
//! | prompt | question | type | option1 | option2 |
//! |---|---|---|---|---|
//! | | Did we solve your problem? | alternative | Yes | No |
//! | Thanks! | Anything else? | fill_blank | | |
//! | | How would you rate us? | rating | | |
//!
//! Headers are matched after trimming and lowercasing. `question` and `type`
//! are required; `option1`/`option2` are required for `alternative` rows.
//! Rating rows always use the `1..5` scale.
//!
//! - `SpreadsheetSource` reads one sheet per language from an xlsx/xls/ods workbook.
//! - `CsvSource` reads one CSV file per language.
//!
//! ## Example
//!
//! ```rust,ignore
//! use chat_survey::{EngineConfig, SurveyEngine};
//! use chat_survey_sheets::SpreadsheetSource;
//!
//! let source = SpreadsheetSource::new("survey_questions.xlsx")
//!     .with_sheet("English", "EN")
//!     .with_sheet("Indonesian", "ID");
//! let engine = SurveyEngine::new(EngineConfig::default(), source);
//! let session = engine.start(&"English".into())?;
//! ```

mod table;
pub use table::{normalize_header, parse_questions};

mod spreadsheet;
pub use spreadsheet::SpreadsheetSource;

mod csv_source;
pub use csv_source::{CsvSource, read_questions};
