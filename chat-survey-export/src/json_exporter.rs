use std::io::Write;

use chat_survey::{AnswerLog, ExportError, Exporter};

/// Writes an answer log as a JSON array of `{question, answer}` objects.
#[derive(Debug, Clone, Copy)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Write everything on one line.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JsonExporter {
    fn export(&self, log: &AnswerLog, out: &mut dyn Write) -> Result<(), ExportError> {
        let written = if self.pretty {
            serde_json::to_writer_pretty(&mut *out, log)
        } else {
            serde_json::to_writer(&mut *out, log)
        };
        written.map_err(ExportError::backend)?;
        writeln!(out)?;
        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }
}

#[cfg(test)]
mod tests {
    use chat_survey::AnswerEntry;

    use super::*;

    #[test]
    fn compact_array() {
        let log = AnswerLog::from(vec![AnswerEntry::new("ID?", "7")]);
        let mut out = Vec::new();
        JsonExporter::new().compact().export(&log, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[{\"question\":\"ID?\",\"answer\":\"7\"}]\n"
        );
    }
}
