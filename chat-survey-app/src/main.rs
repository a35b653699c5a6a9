//! # chat-survey
//!
//! Runs a chat-style survey in the terminal and saves the conversation.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chat_survey::{Language, RoutedSource, SurveyEngine};
use chat_survey_dialoguer::{ChatWizard, WizardError};
use chat_survey_export::{ExportFormat, export_to_path};
use chat_survey_sheets::{CsvSource, SpreadsheetSource};
use chat_survey_transform::ChatCompletionTransformer;
use clap::Parser;
use dialoguer::Confirm;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use self::config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = "chat-survey.yml")]
    config: PathBuf,

    /// Question workbook, overriding the configured one
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Skip the language prompt and use this language
    #[arg(long)]
    language: Option<String>,

    /// Where to save the conversation
    #[arg(long)]
    output: Option<PathBuf>,

    /// Export format: csv, wide-csv or json
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Use the fallback template instead of calling the language model
    #[arg(long)]
    no_model: bool,

    /// Disable colors
    #[arg(long)]
    plain: bool,

    /// Save without asking for confirmation
    #[arg(long)]
    yes: bool,
}

/// Route each language to its CSV file, or to its sheet in the workbook.
fn build_source(config: &AppConfig) -> RoutedSource {
    config
        .languages
        .iter()
        .fold(RoutedSource::new(), |source, language| {
            let name = language.name.clone();
            match (&language.file, &language.sheet) {
                (Some(file), _) => {
                    source.with_route(name.clone(), CsvSource::new().with_file(name, file))
                }
                (None, Some(sheet)) => source.with_route(
                    name.clone(),
                    SpreadsheetSource::new(&config.questions).with_sheet(name, sheet.as_str()),
                ),
                (None, None) => source.with_route(name, SpreadsheetSource::new(&config.questions)),
            }
        })
}

fn build_engine(config: &AppConfig, use_model: bool) -> Result<SurveyEngine> {
    let engine = SurveyEngine::new(config.engine_config(), build_source(config));

    match (&config.transformer, use_model) {
        (Some(transformer), true) => {
            let transformer = ChatCompletionTransformer::new(transformer.clone())
                .context("Failed to set up the language model client")?;
            let settings = transformer.config();
            info!(url = %settings.api_url, mode = ?settings.mode, "Using language model transitions");
            Ok(engine.with_transformer(transformer))
        }
        (Some(_), false) => {
            info!("Language model disabled, using the fallback template");
            Ok(engine)
        }
        (None, _) => Ok(engine),
    }
}

/// `RUST_LOG` directives if set and valid, otherwise `warn`.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .compact()
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(questions) = cli.questions {
        config.questions = questions;
    }
    if let Some(output) = cli.output {
        config.export.path = output;
    }
    if let Some(format) = cli.format {
        config.export.format = format;
    }

    let engine = build_engine(&config, !cli.no_model)?;
    let wizard = if cli.plain {
        ChatWizard::plain()
    } else {
        ChatWizard::new()
    };

    let outcome = match cli.language {
        Some(language) => wizard.run_in(&engine, &Language::new(language)),
        None => wizard.run(&engine),
    };
    let session = match outcome {
        Ok(session) => session,
        Err(WizardError::Cancelled) => {
            warn!("Survey cancelled, nothing saved");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let save = cli.yes
        || Confirm::new()
            .with_prompt(format!("Save the conversation to {}?", config.export.path.display()))
            .default(true)
            .interact()?;
    if !save {
        info!("Conversation discarded");
        return Ok(());
    }

    let exporter = config.export.format.exporter(config.export.headers());
    export_to_path(exporter.as_ref(), &engine.export_log(&session), &config.export.path)
        .with_context(|| format!("Failed to save '{}'", config.export.path.display()))?;
    println!("Saved to {}", config.export.path.display());
    Ok(())
}
