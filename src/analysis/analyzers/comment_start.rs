//! Doc comment checks.
//!
//! Godoc for a serialized field should begin with the field's JSON name,
//! which is how the field appears to API consumers.

use crate::analysis::{Analyzer, AnalyzerInitializer, ApiFile, Diagnostic};
use crate::config::LintersConfig;
use crate::error::Result;

/// Registered name of this analyzer.
pub const NAME: &str = "commentstart";

/// Checks that field doc comments start with the serialized field name.
pub struct CommentStartAnalyzer;

impl Analyzer for CommentStartAnalyzer {
    fn name(&self) -> &str {
        NAME
    }

    fn doc(&self) -> &str {
        "Check that all struct fields in an API have a godoc, and that the godoc starts with the serialised field name"
    }

    fn run(&self, file: &ApiFile) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for ty in &file.types {
            for field in &ty.fields {
                let Some(json_name) = field.serialized_name() else {
                    continue;
                };

                let message = match field.doc_text() {
                    None => format!("field {} is missing godoc comment", field.name),
                    Some(doc) if starts_with_word(&doc, json_name) => continue,
                    Some(_) => format!(
                        "godoc for field {} should start with '{} ...'",
                        field.name, json_name
                    ),
                };

                diagnostics.push(
                    Diagnostic::new(NAME, &file.path, &ty.name, message).with_field(&field.name),
                );
            }
        }

        diagnostics
    }
}

fn starts_with_word(text: &str, word: &str) -> bool {
    match text.strip_prefix(word) {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

/// Builds [`CommentStartAnalyzer`]. Takes no settings. On by default.
pub struct CommentStartInitializer;

impl AnalyzerInitializer for CommentStartInitializer {
    fn name(&self) -> &str {
        NAME
    }

    fn default_enabled(&self) -> bool {
        true
    }

    fn init(&self, _config: &LintersConfig) -> Result<Box<dyn Analyzer>> {
        Ok(Box::new(CommentStartAnalyzer))
    }
}
