//! Dialoguer front end driving a `SurveyEngine`.

use chat_survey::{
    ChatMessage, Language, Question, QuestionKind, Speaker, SurveyEngine, SurveyError,
    SurveySession,
};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use thiserror::Error;
use tracing::debug;

/// Error type for the chat wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The engine refused to start or continue.
    #[error(transparent)]
    Survey(#[from] SurveyError),
}

fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn interaction<T>(result: dialoguer::Result<T>) -> Result<T, WizardError> {
    result.map_err(|err| {
        if is_cancelled(&err) {
            WizardError::Cancelled
        } else {
            WizardError::Dialoguer(err)
        }
    })
}

/// Format one transcript line for the terminal.
pub fn format_message(message: &ChatMessage) -> String {
    let label = match message.speaker {
        Speaker::Bot => "Bot",
        Speaker::User => "You",
    };
    format!("{label}: {}", message.text.trim())
}

/// Print the transcript lines past `shown`, returning the new count.
fn print_new_lines(engine: &SurveyEngine, session: &SurveySession, shown: usize) -> usize {
    let transcript = engine.transcript(session);
    for message in transcript.iter().skip(shown) {
        println!("{}", format_message(message));
    }
    transcript.len()
}

/// Chat-style survey in the terminal.
#[derive(Debug, Clone)]
pub struct ChatWizard {
    colorful: bool,
}

impl Default for ChatWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWizard {
    /// Create a wizard with the colorful theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a wizard with the plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Ask for a language, then walk the whole survey.
    pub fn run(&self, engine: &SurveyEngine) -> Result<SurveySession, WizardError> {
        let language = self.choose_language(engine)?;
        self.run_in(engine, &language)
    }

    /// Walk the whole survey in `language`.
    ///
    /// Invalid answers print an error and the same question is asked again.
    pub fn run_in(
        &self,
        engine: &SurveyEngine,
        language: &Language,
    ) -> Result<SurveySession, WizardError> {
        let mut session = engine.start(language)?;
        let mut shown = 0;

        while let Some(question) = session.current_question().cloned() {
            engine.ask(&mut session);
            shown = print_new_lines(engine, &session, shown);

            loop {
                let raw = self.read_answer(&question)?;
                match engine.submit_answer_at(&mut session, question.index(), &raw) {
                    Ok(advance) => {
                        debug!(?advance, "Answer accepted");
                        break;
                    }
                    Err(err) if err.is_recoverable() => println!("Error: {err}"),
                    Err(err) => return Err(err.into()),
                }
            }
        }

        // The closing message, after the last answer.
        print_new_lines(engine, &session, shown);
        Ok(session)
    }

    /// Let the user pick one of the engine's configured languages.
    pub fn choose_language(&self, engine: &SurveyEngine) -> Result<Language, WizardError> {
        let languages = engine.languages();
        let items: Vec<&str> = languages.iter().map(Language::as_str).collect();

        let theme = ColorfulTheme::default();
        let selection = interaction(
            self.select(&theme)
                .with_prompt("Please choose a language")
                .items(&items)
                .default(0)
                .interact(),
        )?;
        debug!(language = items[selection], "Language chosen");
        Ok(languages[selection].clone())
    }

    fn read_answer(&self, question: &Question) -> Result<String, WizardError> {
        match question.kind() {
            QuestionKind::FillBlank => {
                let theme = ColorfulTheme::default();
                let input = if self.colorful {
                    Input::<String>::with_theme(&theme)
                } else {
                    Input::<String>::new()
                };
                interaction(input.with_prompt("You").allow_empty(true).interact_text())
            }
            QuestionKind::Alternative(_) | QuestionKind::Rating(_) => {
                let theme = ColorfulTheme::default();
                let options = question.options();
                let selection = interaction(
                    self.select(&theme)
                        .with_prompt("You")
                        .items(options)
                        .default(0)
                        .interact(),
                )?;
                Ok(options[selection].clone())
            }
        }
    }

    fn select<'t>(&self, theme: &'t ColorfulTheme) -> Select<'t> {
        if self.colorful {
            Select::with_theme(theme)
        } else {
            Select::new()
        }
    }
}
