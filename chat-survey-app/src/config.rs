//! Application configuration, loaded from `chat-survey.yml` and the environment.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chat_survey::{EngineConfig, Language};
use chat_survey_export::ExportFormat;
use chat_survey_transform::TransformerConfig;
use serde::Deserialize;
use tracing::info;

pub const API_URL_VAR: &str = "SURVEY_AI_API_URL";
pub const API_KEY_VAR: &str = "SURVEY_AI_API_KEY";
pub const MODEL_VAR: &str = "SURVEY_AI_MODEL";

/// The root configuration structure, mapping directly to `chat-survey.yml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Workbook holding one question sheet per language.
    pub questions: PathBuf,

    /// Languages offered to the user, in display order.
    pub languages: Vec<LanguageConfig>,

    pub greeting: Option<String>,
    pub fallback_template: Option<String>,
    pub closing: Option<String>,

    /// Model settings. Without them every transition uses the fallback template.
    pub transformer: Option<TransformerConfig>,

    pub export: ExportConfig,
}

/// Where one language's questions live.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LanguageConfig {
    pub name: Language,

    /// Sheet name inside the workbook. Defaults to the language name.
    #[serde(default)]
    pub sheet: Option<String>,

    /// A CSV file used instead of the workbook.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LanguageConfig {
    fn sheet(name: &str, sheet: &str) -> Self {
        Self {
            name: name.into(),
            sheet: Some(sheet.to_string()),
            file: None,
        }
    }
}

/// Where and how the finished conversation is saved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub question_header: Option<String>,
    pub answer_header: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            path: PathBuf::from("conversation.csv"),
            question_header: None,
            answer_header: None,
        }
    }
}

impl ExportConfig {
    /// Column headers for the long CSV layout, if both are configured.
    pub fn headers(&self) -> Option<(&str, &str)> {
        Some((self.question_header.as_deref()?, self.answer_header.as_deref()?))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            questions: PathBuf::from("survey_questions.xlsx"),
            languages: vec![
                LanguageConfig::sheet("English", "EN"),
                LanguageConfig::sheet("Indonesian", "ID"),
            ],
            greeting: None,
            fallback_template: None,
            closing: None,
            transformer: None,
            export: ExportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `path`, falling back to defaults if it does not exist, then apply
    /// environment overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            info!(path = %path.display(), "Loading configuration");
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            Self::from_yaml(&content)
                .with_context(|| format!("Invalid configuration in '{}'", path.display()))?
        } else {
            info!(path = %path.display(), "Configuration not found, using defaults");
            Self::default()
        };
        config.apply_overrides(|var| std::env::var(var).ok());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        anyhow::ensure!(
            !config.languages.is_empty(),
            "At least one language must be configured"
        );
        Ok(config)
    }

    /// Apply `SURVEY_AI_*` overrides. An API URL enables the transformer if the
    /// file did not configure one.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(api_url) = var(API_URL_VAR) {
            match &mut self.transformer {
                Some(transformer) => transformer.api_url = api_url,
                None => self.transformer = Some(TransformerConfig::new(api_url)),
            }
        }
        if let Some(transformer) = &mut self.transformer {
            if let Some(api_key) = var(API_KEY_VAR) {
                transformer.api_key = Some(api_key);
            }
            if let Some(model) = var(MODEL_VAR) {
                transformer.model = Some(model);
            }
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        let mut engine = EngineConfig::new(self.languages.iter().map(|l| l.name.clone()));
        if let Some(greeting) = &self.greeting {
            engine = engine.with_greeting(greeting.as_str());
        }
        if let Some(template) = &self.fallback_template {
            engine = engine.with_fallback_template(template.as_str());
        }
        if let Some(closing) = &self.closing {
            engine = engine.with_closing(closing.as_str());
        }
        engine
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chat_survey_transform::TransformMode;

    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("chat-survey.yml")).unwrap();

        assert_eq!(config.questions, PathBuf::from("survey_questions.xlsx"));
        let names: Vec<&str> = config.languages.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["English", "Indonesian"]);
        assert_eq!(config.languages[1].sheet.as_deref(), Some("ID"));
        assert_eq!(config.export.format, ExportFormat::Csv);
    }

    #[test]
    fn full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat-survey.yml");
        std::fs::write(
            &path,
            r#"
questions: sif.xlsx
languages:
  - name: English
    sheet: EN
  - name: Indonesian
    file: questions_id.csv
greeting: "Hello, welcome to SIF Post-Survey, please tell me your ID."
transformer:
  api_url: http://localhost:11434/v1/chat/completions
  model: llama3
  mode: gamify
export:
  format: wide-csv
  path: out.csv
  question_header: SIF Contact Centre
  answer_header: User
"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.questions, PathBuf::from("sif.xlsx"));
        assert_eq!(
            config.languages[1].file.as_deref(),
            Some(Path::new("questions_id.csv"))
        );
        assert_eq!(
            config.transformer.as_ref().map(|t| t.mode),
            Some(TransformMode::Gamify)
        );
        assert_eq!(config.export.format, ExportFormat::WideCsv);
        assert_eq!(config.export.headers(), Some(("SIF Contact Centre", "User")));

        let engine = config.engine_config();
        assert_eq!(
            engine.greeting,
            "Hello, welcome to SIF Post-Survey, please tell me your ID."
        );
        assert_eq!(engine.closing, "Thank you for completing the survey!");
    }

    #[test]
    fn empty_language_list_is_rejected() {
        assert!(AppConfig::from_yaml("languages: []").is_err());
    }

    #[test]
    fn environment_overrides() {
        let vars: HashMap<&str, &str> = [
            (API_URL_VAR, "http://models.internal/v1/chat/completions"),
            (API_KEY_VAR, "secret"),
            (MODEL_VAR, "mistral"),
        ]
        .into();
        let lookup = |name: &str| vars.get(name).map(|v| v.to_string());

        let mut config = AppConfig::default();
        config.apply_overrides(lookup);
        let transformer = config.transformer.unwrap();
        assert_eq!(transformer.api_url, "http://models.internal/v1/chat/completions");
        assert_eq!(transformer.api_key.as_deref(), Some("secret"));
        assert_eq!(transformer.model.as_deref(), Some("mistral"));

        let mut config = AppConfig::default();
        config.apply_overrides(|name| (name == MODEL_VAR).then(|| "mistral".to_string()));
        assert!(config.transformer.is_none());
    }
}
