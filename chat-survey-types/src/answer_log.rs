use serde::{Deserialize, Serialize};

/// One recorded question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    /// The bot message the user was answering.
    pub question: String,

    /// The user's accepted answer.
    pub answer: String,
}

impl AnswerEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The ordered, append-only record of one survey session.
///
/// Entries are kept in submission order. Serializes as a plain array of
/// `{question, answer}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerLog {
    entries: Vec<AnswerEntry>,
}

impl AnswerLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry at the end of the log.
    pub fn push(&mut self, entry: AnswerEntry) {
        self.entries.push(entry);
    }

    /// Get the entries in submission order.
    pub fn entries(&self) -> &[AnswerEntry] {
        &self.entries
    }

    /// Get the most recent entry.
    pub fn last(&self) -> Option<&AnswerEntry> {
        self.entries.last()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, AnswerEntry> {
        self.entries.iter()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<AnswerEntry>> for AnswerLog {
    fn from(entries: Vec<AnswerEntry>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for AnswerLog {
    type Item = AnswerEntry;
    type IntoIter = std::vec::IntoIter<AnswerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnswerLog {
    type Item = &'a AnswerEntry;
    type IntoIter = std::slice::Iter<'a, AnswerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
