use std::sync::Arc;

use crate::{AnswerEntry, AnswerLog, Language, Question, SurveyState};

/// One user's pass through the survey.
///
/// Created by `SurveyEngine::start` and mutated only by the engine. The
/// caller owns the value between interaction turns. Cloning is cheap: the
/// question list is shared.
#[derive(Debug, Clone)]
pub struct SurveySession {
    language: Language,
    questions: Arc<[Question]>,
    current_index: usize,
    answers: AnswerLog,
    /// Bot message rendered for `current_index`, if it has been asked.
    pending_prompt: Option<String>,
}

impl SurveySession {
    pub(crate) fn new(language: Language, questions: Vec<Question>) -> Self {
        Self {
            language,
            questions: questions.into(),
            current_index: 0,
            answers: AnswerLog::new(),
            pending_prompt: None,
        }
    }

    /// The language frozen at `start`.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Number of questions in the survey.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Index of the question awaiting an answer.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// The question answered last, if any.
    pub fn previous_question(&self) -> Option<&Question> {
        self.current_index
            .checked_sub(1)
            .and_then(|idx| self.questions.get(idx))
    }

    /// Answers recorded so far.
    pub fn answers(&self) -> &AnswerLog {
        &self.answers
    }

    /// The rendered bot message for the current question, if already asked.
    pub fn pending_prompt(&self) -> Option<&str> {
        self.pending_prompt.as_deref()
    }

    /// Check if every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// `InProgress` until the last answer is accepted, then `Completed`.
    pub fn state(&self) -> SurveyState {
        if self.is_complete() {
            SurveyState::Completed
        } else {
            SurveyState::InProgress
        }
    }

    pub(crate) fn set_pending_prompt(&mut self, prompt: String) {
        self.pending_prompt = Some(prompt);
    }

    /// Record an answer for the current question and move to the next one.
    pub(crate) fn record(&mut self, entry: AnswerEntry) {
        self.answers.push(entry);
        self.current_index += 1;
        self.pending_prompt = None;
    }
}
