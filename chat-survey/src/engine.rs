//! The survey progression engine.

use tracing::{debug, info, warn};

use crate::{
    AnswerEntry, AnswerLog, ChatMessage, DEFAULT_FALLBACK_TEMPLATE, DEFAULT_GREETING,
    EngineConfig, InvalidAnswer, Language, Question, QuestionKind, QuestionSource,
    QuestionSourceError, ResponseTransformer, SurveyError, SurveySession,
};

/// What an accepted (or ignored) submission did to the session.
///
/// Front ends redraw when `changed()` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The answer was recorded; `index` is the next question to ask.
    Next { index: usize },

    /// The answer was recorded and it was the last one.
    Completed,

    /// The submission was stale (a duplicate trigger) and nothing changed.
    Unchanged,
}

impl Advance {
    /// Check if the session changed and the caller should redraw.
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Owns the rules for walking a question list.
///
/// The engine holds no per-user state: every operation takes the
/// `SurveySession` it works on, so one engine serves any number of sessions.
pub struct SurveyEngine {
    config: EngineConfig,
    source: Box<dyn QuestionSource>,
    transformer: Option<Box<dyn ResponseTransformer>>,
}

impl std::fmt::Debug for SurveyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurveyEngine")
            .field("config", &self.config)
            .field("transformer", &self.transformer.is_some())
            .finish_non_exhaustive()
    }
}

impl SurveyEngine {
    /// Create an engine reading questions from `source`, without a transformer.
    pub fn new(config: EngineConfig, source: impl QuestionSource + 'static) -> Self {
        Self {
            config,
            source: Box::new(source),
            transformer: None,
        }
    }

    /// Enrich bot messages with `transformer`.
    pub fn with_transformer(mut self, transformer: impl ResponseTransformer + 'static) -> Self {
        self.transformer = Some(Box::new(transformer));
        self
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The languages `start` accepts.
    pub fn languages(&self) -> &[Language] {
        &self.config.languages
    }

    /// Check if a transformer is configured.
    pub fn has_transformer(&self) -> bool {
        self.transformer.is_some()
    }

    /// Begin a new session in `language`.
    ///
    /// # Errors
    /// * `SurveyError::UnsupportedLanguage` if `language` is not configured
    /// * `SurveyError::QuestionSource` if the question set cannot be loaded or is empty
    pub fn start(&self, language: &Language) -> Result<SurveySession, SurveyError> {
        if !self.config.supports(language) {
            return Err(SurveyError::UnsupportedLanguage {
                language: language.clone(),
                supported: self.config.languages.clone(),
            });
        }

        let questions = self.source.load(language)?;
        if questions.is_empty() {
            return Err(QuestionSourceError::Empty.into());
        }
        if let Some((position, question)) = questions
            .iter()
            .enumerate()
            .find(|(position, question)| question.index() != *position)
        {
            return Err(QuestionSourceError::backend(anyhow::anyhow!(
                "question at position {position} has index {}",
                question.index()
            ))
            .into());
        }

        let session = SurveySession::new(language.clone(), questions);
        info!(%language, questions = session.question_count(), "Survey started");
        Ok(session)
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_question<'s>(&self, session: &'s SurveySession) -> Option<&'s Question> {
        session.current_question()
    }

    /// Compose the bot message for `question`.
    ///
    /// The first question always gets the greeting. Later questions get the
    /// transformer's reply to the previous question and answer, followed by
    /// the question, or the fallback template when there is no transformer or
    /// it fails. The result is never empty.
    pub fn render_prompt(&self, session: &SurveySession, question: &Question) -> String {
        if question.index() == 0 {
            return non_blank(&self.config.greeting).unwrap_or_else(|| DEFAULT_GREETING.to_string());
        }

        if let Some(transformer) = &self.transformer {
            let context = session
                .previous_question()
                .map(Question::display_text)
                .unwrap_or_default();
            let last_answer = session
                .answers()
                .last()
                .map(|entry| entry.answer.as_str())
                .unwrap_or_default();

            match transformer.transform(&context, last_answer) {
                Ok(reply) if !reply.trim().is_empty() => {
                    return format!("{} {}", reply.trim(), question.display_text());
                }
                Ok(_) => {
                    warn!(
                        index = question.index(),
                        "Transformer returned an empty reply, using fallback"
                    );
                }
                Err(err) => {
                    warn!(
                        index = question.index(),
                        error = %err,
                        "Transformer failed, using fallback"
                    );
                }
            }
        }

        self.fallback(question)
    }

    fn fallback(&self, question: &Question) -> String {
        let fill = |template: &str| {
            template
                .replace("{question}", question.text().trim())
                .replace("{prompt}", question.prompt().unwrap_or_default().trim())
        };
        non_blank(&fill(&self.config.fallback_template))
            .unwrap_or_else(|| fill(DEFAULT_FALLBACK_TEMPLATE))
    }

    /// Render the current question's bot message once and cache it in the session.
    ///
    /// Repeated calls return the cached message without invoking the
    /// transformer again. Returns `None` once the survey is complete.
    pub fn ask<'s>(&self, session: &'s mut SurveySession) -> Option<&'s str> {
        if session.pending_prompt().is_none() {
            let question = session.current_question()?;
            let prompt = self.render_prompt(session, question);
            debug!(index = question.index(), %prompt, "Asking question");
            session.set_pending_prompt(prompt);
        }
        session.pending_prompt()
    }

    /// Check `raw` against `question`, returning the answer to record.
    ///
    /// Fill-in answers must be non-blank and are recorded trimmed. Choice
    /// answers must match one of the options (surrounding whitespace ignored);
    /// the option itself is recorded.
    pub fn check_answer(question: &Question, raw: &str) -> Result<String, InvalidAnswer> {
        let answer = raw.trim();
        if answer.is_empty() {
            return Err(InvalidAnswer::Empty);
        }

        match question.kind() {
            QuestionKind::FillBlank => Ok(answer.to_string()),
            QuestionKind::Alternative(_) | QuestionKind::Rating(_) => question
                .options()
                .iter()
                .find(|option| option.trim() == answer)
                .cloned()
                .ok_or_else(|| InvalidAnswer::NotAnOption {
                    answer: answer.to_string(),
                    options: question.options().to_vec(),
                }),
        }
    }

    /// Record an answer to the current question and advance by one.
    ///
    /// The recorded question text is the rendered bot message (the cached one
    /// from `ask` if present).
    ///
    /// # Errors
    /// * `SurveyError::AlreadyComplete` if every question is answered
    /// * `SurveyError::InvalidAnswer` if `raw` does not fit; the session is unchanged
    pub fn submit_answer(
        &self,
        session: &mut SurveySession,
        raw: &str,
    ) -> Result<Advance, SurveyError> {
        let Some(question) = session.current_question() else {
            return Err(SurveyError::AlreadyComplete);
        };

        let answer = Self::check_answer(question, raw).inspect_err(|err| {
            debug!(index = question.index(), %err, "Answer rejected");
        })?;

        let prompt = match session.pending_prompt() {
            Some(prompt) => prompt.to_string(),
            None => self.render_prompt(session, question),
        };

        session.record(AnswerEntry::new(prompt, answer));

        if session.is_complete() {
            info!(
                language = %session.language(),
                answers = session.answers().len(),
                "Survey completed"
            );
            Ok(Advance::Completed)
        } else {
            debug!(index = session.current_index(), "Advanced to next question");
            Ok(Advance::Next {
                index: session.current_index(),
            })
        }
    }

    /// Like `submit_answer`, but only if `index` is still the current question.
    ///
    /// A second trigger for an index that has already advanced returns
    /// `Advance::Unchanged` instead of recording the answer twice.
    pub fn submit_answer_at(
        &self,
        session: &mut SurveySession,
        index: usize,
        raw: &str,
    ) -> Result<Advance, SurveyError> {
        if index != session.current_index() {
            debug!(
                index,
                current = session.current_index(),
                "Ignoring stale submission"
            );
            return Ok(Advance::Unchanged);
        }
        self.submit_answer(session, raw)
    }

    /// Check if every question has been answered.
    pub fn is_complete(&self, session: &SurveySession) -> bool {
        session.is_complete()
    }

    /// The recorded question/answer pairs, in submission order.
    pub fn export_log(&self, session: &SurveySession) -> AnswerLog {
        session.answers().clone()
    }

    /// The conversation so far, top to bottom.
    ///
    /// Each recorded entry becomes a bot message and the user's reply. The
    /// pending bot message follows if the current question has been asked, or
    /// the closing message once complete.
    pub fn transcript(&self, session: &SurveySession) -> Vec<ChatMessage> {
        let mut messages: Vec<ChatMessage> = session
            .answers()
            .iter()
            .flat_map(|entry| {
                [
                    ChatMessage::bot(entry.question.clone()),
                    ChatMessage::user(entry.answer.clone()),
                ]
            })
            .collect();

        if session.is_complete() {
            messages.push(ChatMessage::bot(self.config.closing.clone()));
        } else if let Some(prompt) = session.pending_prompt() {
            messages.push(ChatMessage::bot(prompt));
        }

        messages
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
