use serde::{Deserialize, Serialize};

/// Who wrote a line of the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Bot,
    User,
}

/// One line of the rendered conversation, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }
}

/// Where a survey walk currently stands.
///
/// `AwaitingLanguage` is held by front ends before a session exists;
/// sessions themselves are only ever `InProgress` or `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurveyState {
    #[default]
    AwaitingLanguage,
    InProgress,
    Completed,
}
