//! Turning a header row plus data rows into questions.

use chat_survey::{Question, QuestionKind, QuestionSourceError};
use tracing::debug;

const QUESTION: &str = "question";
const TYPE: &str = "type";
const PROMPT: &str = "prompt";
const OPTION_COLUMNS: [&str; 5] = ["option1", "option2", "option3", "option4", "option5"];

/// Normalize a header cell: trim, lowercase, spaces to underscores.
///
/// `questions` is folded into `question` so single-column sheets keep working.
pub fn normalize_header(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase().replace(' ', "_");
    match normalized.as_str() {
        "questions" => QUESTION.to_string(),
        _ => normalized,
    }
}

/// Column positions resolved from the header row.
struct Columns {
    question: usize,
    kind: usize,
    prompt: Option<usize>,
    options: Vec<Option<usize>>,
}

impl Columns {
    fn resolve(headers: &[String]) -> Result<Self, QuestionSourceError> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let find = |name: &str| normalized.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| QuestionSourceError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            question: require(QUESTION)?,
            kind: require(TYPE)?,
            prompt: find(PROMPT),
            options: OPTION_COLUMNS.iter().map(|name| find(name)).collect(),
        })
    }
}

fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map(|s| s.trim()).unwrap_or_default()
}

/// Parse a question table.
///
/// `rows` excludes the header. Fully blank rows are skipped; row numbers in
/// errors count the header as row 1, as a spreadsheet would show them.
///
/// # Errors
/// * `MissingColumn` if `question` or `type` is absent, or an `alternative`
///   row needs an option column that is absent
/// * `MissingValue` for blank `question`, `type`, or required option cells
/// * `UnknownType` for any type other than `alternative`, `fill_blank`, `rating`
/// * `Empty` if no question rows remain
pub fn parse_questions<I>(headers: &[String], rows: I) -> Result<Vec<Question>, QuestionSourceError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let columns = Columns::resolve(headers)?;
    let mut questions = Vec::new();

    for (offset, row) in rows.into_iter().enumerate() {
        let row_number = offset + 2;
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }

        let type_name = cell(&row, columns.kind);
        if type_name.is_empty() {
            return Err(QuestionSourceError::MissingValue {
                row: row_number,
                column: TYPE.to_string(),
            });
        }
        let Some(needed) = QuestionKind::expected_options(type_name) else {
            return Err(QuestionSourceError::UnknownType {
                row: row_number,
                value: type_name.to_string(),
            });
        };

        let text = cell(&row, columns.question);
        if text.is_empty() {
            return Err(QuestionSourceError::MissingValue {
                row: row_number,
                column: QUESTION.to_string(),
            });
        }

        // Rating rows use the fixed scale, so only alternatives read option cells.
        let options = if needed == 2 {
            read_options(&row, row_number, &columns.options[..needed])?
        } else {
            Vec::new()
        };

        let kind = QuestionKind::from_type_name(type_name, &options).ok_or_else(|| {
            QuestionSourceError::UnknownType {
                row: row_number,
                value: type_name.to_string(),
            }
        })?;

        let mut question = Question::new(questions.len(), text, kind);
        if let Some(prompt) = columns.prompt.map(|column| cell(&row, column)) {
            question = question.with_prompt(prompt);
        }
        questions.push(question);
    }

    if questions.is_empty() {
        return Err(QuestionSourceError::Empty);
    }

    debug!(count = questions.len(), "Parsed question table");
    Ok(questions)
}

fn read_options(
    row: &[String],
    row_number: usize,
    columns: &[Option<usize>],
) -> Result<Vec<String>, QuestionSourceError> {
    columns
        .iter()
        .zip(OPTION_COLUMNS)
        .map(|(column, name)| {
            let column = column.ok_or_else(|| QuestionSourceError::MissingColumn(name.to_string()))?;
            match cell(row, column) {
                "" => Err(QuestionSourceError::MissingValue {
                    row: row_number,
                    column: name.to_string(),
                }),
                value => Ok(value.to_string()),
            }
        })
        .collect()
}
