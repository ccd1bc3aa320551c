//! Export formats and the exporter seam.
//!
//! Exports are rendered in memory only. Nothing is written to disk; the
//! session reports the rendered size once the export delay has elapsed.

use std::fmt;

use serde::Serialize;

use super::project::ProjectConfiguration;
use super::questionnaire::{to_plain_text, Questionnaire};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Word,
    Pdf,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Word, ExportFormat::Pdf, ExportFormat::Json];

    /// Upper-case name used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Word => "WORD",
            ExportFormat::Pdf => "PDF",
            ExportFormat::Json => "JSON",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("No questionnaire has been generated yet")]
    NothingToExport,

    #[error("Failed to serialize questionnaire: {0}")]
    Serialization(String),
}

pub trait Exporter: Send + Sync {
    fn export(
        &self,
        format: ExportFormat,
        questionnaire: &Questionnaire,
        project: &ProjectConfiguration,
    ) -> Result<Vec<u8>, ExportError>;
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    project: &'a ProjectConfiguration,
    questionnaire: &'a Questionnaire,
}

/// Built-in exporter.
///
/// JSON is a pretty-printed `{project, questionnaire}` document. Word and
/// PDF fall back to the plain-text rendering until a real document
/// backend is plugged in.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentExporter;

impl Exporter for DocumentExporter {
    fn export(
        &self,
        format: ExportFormat,
        questionnaire: &Questionnaire,
        project: &ProjectConfiguration,
    ) -> Result<Vec<u8>, ExportError> {
        match format {
            ExportFormat::Json => serde_json::to_vec_pretty(&JsonDocument {
                project,
                questionnaire,
            })
            .map_err(|e| ExportError::Serialization(e.to_string())),
            ExportFormat::Word | ExportFormat::Pdf => {
                Ok(to_plain_text(questionnaire, project).into_bytes())
            }
        }
    }
}
