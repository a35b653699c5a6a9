use serde::Deserialize;

use crate::Language;

/// Greeting used for the first question when none is configured.
pub const DEFAULT_GREETING: &str = "Hello, welcome to the survey! Please tell me your ID.";

/// Template used when no transition can be generated.
///
/// `{question}` is replaced by the question body, `{prompt}` by its lead-in.
pub const DEFAULT_FALLBACK_TEMPLATE: &str = "Alright, next: {question}";

const DEFAULT_CLOSING: &str = "Thank you for completing the survey!";

/// Static settings of a `SurveyEngine`.
///
/// Deserializable so front ends can embed it in their own config files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// The languages `start` accepts, in the order front ends offer them.
    pub languages: Vec<Language>,

    /// Bot message for the first question.
    pub greeting: String,

    /// Bot message template for later questions when the transformer is absent or fails.
    pub fallback_template: String,

    /// Bot message shown once every question is answered.
    pub closing: String,
}

impl EngineConfig {
    /// Create a config accepting the given languages, with default messages.
    pub fn new(languages: impl IntoIterator<Item = impl Into<Language>>) -> Self {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the greeting.
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Set the fallback template.
    pub fn with_fallback_template(mut self, template: impl Into<String>) -> Self {
        self.fallback_template = template.into();
        self
    }

    /// Set the closing message.
    pub fn with_closing(mut self, closing: impl Into<String>) -> Self {
        self.closing = closing.into();
        self
    }

    /// Check if `language` is in the configured set.
    pub fn supports(&self, language: &Language) -> bool {
        self.languages.contains(language)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            languages: vec![Language::new("English"), Language::new("Indonesian")],
            greeting: DEFAULT_GREETING.to_string(),
            fallback_template: DEFAULT_FALLBACK_TEMPLATE.to_string(),
            closing: DEFAULT_CLOSING.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_offer_english_and_indonesian() {
        let config = EngineConfig::default();
        assert!(config.supports(&"English".into()));
        assert!(config.supports(&"Indonesian".into()));
        assert!(!config.supports(&"French".into()));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: EngineConfig = serde_yaml::from_str(
            "languages: [English]\ngreeting: Hi there, what is your ID?\n",
        )
        .unwrap();

        assert_eq!(config.languages, vec![Language::new("English")]);
        assert_eq!(config.greeting, "Hi there, what is your ID?");
        assert_eq!(config.fallback_template, DEFAULT_FALLBACK_TEMPLATE);
    }
}
