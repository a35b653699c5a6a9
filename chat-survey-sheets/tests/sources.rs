//! Integration tests for the file-backed question sources

use std::fs;

use chat_survey::{
    Advance, EngineConfig, QuestionKind, QuestionSource, QuestionSourceError, SurveyEngine,
    SurveyError,
};
use chat_survey_sheets::{CsvSource, SpreadsheetSource, read_questions};

const ENGLISH: &str = "\
prompt,question,type,option1,option2
,Did we solve your problem?,alternative,Yes,No
Thanks!,Anything else to tell us?,fill_blank,,
,How would you rate the call?,rating,,
";

const INDONESIAN: &str = "\
prompt,question,type,option1,option2
,Apakah masalah Anda terselesaikan?,alternative,Ya,Tidak
";

#[test]
fn test_csv_source_per_language() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let en = dir.path().join("en.csv");
    let id = dir.path().join("id.csv");
    fs::write(&en, ENGLISH)?;
    fs::write(&id, INDONESIAN)?;

    let source = CsvSource::new()
        .with_file("English", &en)
        .with_file("Indonesian", &id);

    let english = source.load(&"English".into())?;
    assert_eq!(english.len(), 3);
    assert_eq!(english[1].display_text(), "Thanks! Anything else to tell us?");

    let indonesian = source.load(&"Indonesian".into())?;
    assert_eq!(indonesian[0].kind(), &QuestionKind::alternative("Ya", "Tidak"));
    Ok(())
}

#[test]
fn test_csv_source_drives_engine() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let en = dir.path().join("en.csv");
    fs::write(&en, ENGLISH)?;

    let engine = SurveyEngine::new(
        EngineConfig::new(["English"]),
        CsvSource::new().with_file("English", &en),
    );
    let mut session = engine.start(&"English".into())?;
    engine.submit_answer(&mut session, "Yes")?;
    engine.submit_answer(&mut session, "hello")?;
    assert_eq!(engine.submit_answer(&mut session, "5")?, Advance::Completed);
    Ok(())
}

#[test]
fn test_unmapped_language() {
    let source = CsvSource::new();
    assert!(matches!(
        source.load(&"English".into()),
        Err(QuestionSourceError::MissingSheet(name)) if name == "English"
    ));
}

#[test]
fn test_missing_file_fails_start() {
    let engine = SurveyEngine::new(
        EngineConfig::new(["English"]),
        CsvSource::new().with_file("English", "does/not/exist.csv"),
    );
    assert!(matches!(
        engine.start(&"English".into()),
        Err(SurveyError::QuestionSource(QuestionSourceError::Backend(_)))
    ));
}

#[test]
fn test_read_questions_reports_unknown_type() {
    let csv = "question,type\nWhat colour?,dropdown\n";
    assert!(matches!(
        read_questions(csv.as_bytes()),
        Err(QuestionSourceError::UnknownType { row: 2, .. })
    ));
}

#[test]
fn test_workbook_that_is_not_a_workbook() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("questions.xlsx");
    fs::write(&path, "this is not a zip archive")?;

    let source = SpreadsheetSource::new(&path).with_sheet("English", "EN");
    assert!(matches!(
        source.load(&"English".into()),
        Err(QuestionSourceError::Backend(_))
    ));
    Ok(())
}

fn workbook() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/survey_questions.xlsx")
}

#[test]
fn test_workbook_sheet_per_language() -> anyhow::Result<()> {
    let source = SpreadsheetSource::new(workbook())
        .with_sheet("English", "EN")
        .with_sheet("Indonesian", "ID");

    let english = source.load(&"English".into())?;
    assert_eq!(english.len(), 4);
    assert_eq!(english[0].kind(), &QuestionKind::alternative("Yes", "No"));
    assert_eq!(english[1].display_text(), "Thanks! Anything else to tell us?");
    // Numeric option cells read back as they are shown.
    assert_eq!(english[2].options(), ["1", "2"]);
    assert_eq!(english[3].kind(), &QuestionKind::rating());
    assert_eq!(english[3].index(), 3);

    let indonesian = source.load(&"Indonesian".into())?;
    assert_eq!(indonesian.len(), 2);
    assert_eq!(indonesian[0].options(), ["Ya", "Tidak"]);
    Ok(())
}

#[test]
fn test_workbook_missing_sheet() {
    let source = SpreadsheetSource::new(workbook()).with_sheet("English", "EN");
    assert!(matches!(
        source.load(&"French".into()),
        Err(QuestionSourceError::MissingSheet(name)) if name == "French"
    ));
}

#[test]
fn test_workbook_drives_engine() -> anyhow::Result<()> {
    let engine = SurveyEngine::new(
        EngineConfig::new(["English"]),
        SpreadsheetSource::new(workbook()).with_sheet("English", "EN"),
    );
    let mut session = engine.start(&"English".into())?;
    for answer in ["No", "More staff please", "2"] {
        engine.submit_answer(&mut session, answer)?;
    }
    assert_eq!(engine.submit_answer(&mut session, "4")?, Advance::Completed);
    assert_eq!(engine.export_log(&session).len(), 4);
    Ok(())
}
