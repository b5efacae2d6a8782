//! JSON output formatter.
//!
//! Formats diagnostics as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::analysis::Diagnostic;
use serde::Serialize;
use std::io::Write;

/// Formats diagnostics as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    diagnostics: Vec<JsonDiagnostic>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    analyzer: String,
    file: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    message: String,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format(&self, diagnostics: &[Diagnostic], writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            diagnostics: diagnostics
                .iter()
                .map(|d| JsonDiagnostic {
                    analyzer: d.analyzer.clone(),
                    file: d.file.display().to_string(),
                    type_name: d.type_name.clone(),
                    field: d.field.clone(),
                    message: d.message.clone(),
                })
                .collect(),
            summary: JsonSummary {
                total: diagnostics.len(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
