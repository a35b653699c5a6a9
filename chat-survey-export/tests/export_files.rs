//! Exporting finished sessions to files

use chat_survey::{EngineConfig, Question, QuestionKind, StaticSource, SurveyEngine};
use chat_survey_export::{ExportFormat, export_to_path};

fn finished_log() -> anyhow::Result<chat_survey::AnswerLog> {
    let engine = SurveyEngine::new(
        EngineConfig::new(["English"]),
        StaticSource::new().with_questions(
            "English",
            vec![
                Question::new(0, "Did we solve it?", QuestionKind::alternative("Yes", "No")),
                Question::new(1, "Rate us.", QuestionKind::rating()),
            ],
        ),
    );
    let mut session = engine.start(&"English".into())?;
    engine.submit_answer(&mut session, "Yes")?;
    engine.submit_answer(&mut session, "5")?;
    assert!(engine.is_complete(&session));
    Ok(engine.export_log(&session))
}

#[test]
fn test_long_csv_file() -> anyhow::Result<()> {
    let log = finished_log()?;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("conversation.csv");

    let exporter = ExportFormat::Csv.exporter(Some(("SIF Contact Centre", "User")));
    export_to_path(exporter.as_ref(), &log, &path)?;

    let written = std::fs::read_to_string(&path)?;
    assert_eq!(
        written,
        "SIF Contact Centre,User\n\
         \"Hello, welcome to the survey! Please tell me your ID.\",Yes\n\
         \"Alright, next: Rate us.\",5\n"
    );
    Ok(())
}

#[test]
fn test_json_file_reads_back() -> anyhow::Result<()> {
    let log = finished_log()?;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("conversation.json");

    export_to_path(ExportFormat::Json.exporter(None).as_ref(), &log, &path)?;

    let parsed: chat_survey::AnswerLog = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(parsed, log);
    Ok(())
}

#[test]
fn test_export_is_stable() -> anyhow::Result<()> {
    let log = finished_log()?;
    let exporter = ExportFormat::WideCsv.exporter(None);
    let mut first = Vec::new();
    let mut second = Vec::new();
    exporter.export(&log, &mut first)?;
    exporter.export(&log, &mut second)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_missing_directory_is_io_error() -> anyhow::Result<()> {
    let log = finished_log()?;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing").join("out.csv");
    let err = export_to_path(ExportFormat::Csv.exporter(None).as_ref(), &log, &path).unwrap_err();
    assert!(matches!(err, chat_survey::ExportError::Io(_)));
    Ok(())
}

#[test]
fn test_format_from_yaml() -> anyhow::Result<()> {
    let format: ExportFormat = serde_yaml::from_str("wide-csv")?;
    assert_eq!(format, ExportFormat::WideCsv);
    Ok(())
}
