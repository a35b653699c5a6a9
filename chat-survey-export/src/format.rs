use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use chat_survey::{AnswerLog, ExportError, Exporter};
use serde::Deserialize;
use tracing::info;

use crate::{CsvExporter, JsonExporter};

/// The export formats selectable from configuration or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    #[default]
    Csv,
    WideCsv,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Csv, Self::WideCsv, Self::Json];

    pub fn name(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::WideCsv => "wide-csv",
            Self::Json => "json",
        }
    }

    /// Build the exporter for this format. `headers` only affects `Csv`.
    pub fn exporter(self, headers: Option<(&str, &str)>) -> Box<dyn Exporter> {
        match self {
            Self::Csv => {
                let exporter = CsvExporter::long();
                match headers {
                    Some((question, answer)) => Box::new(exporter.with_headers(question, answer)),
                    None => Box::new(exporter),
                }
            }
            Self::WideCsv => Box::new(CsvExporter::wide()),
            Self::Json => Box::new(JsonExporter::new()),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown export format '{s}' (expected csv, wide-csv or json)"))
    }
}

/// Create or truncate `path` and export `log` into it.
pub fn export_to_path(
    exporter: &dyn Exporter,
    log: &AnswerLog,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    exporter.export(log, &mut out)?;
    out.flush()?;
    info!(path = %path.display(), entries = log.len(), "Exported answer log");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("csv".parse(), Ok(ExportFormat::Csv));
        assert_eq!(" Wide-CSV ".parse(), Ok(ExportFormat::WideCsv));
        assert_eq!("json".parse(), Ok(ExportFormat::Json));
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn exporter_per_format() {
        assert_eq!(ExportFormat::Csv.exporter(None).file_extension(), "csv");
        assert_eq!(ExportFormat::Json.exporter(None).mime_type(), "application/json");
    }
}
