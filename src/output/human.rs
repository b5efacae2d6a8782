//! Human-readable output formatter.
//!
//! Formats diagnostics for terminal display with optional color support.

use super::LintFormatter;
use crate::analysis::Diagnostic;
use console::style;
use std::collections::BTreeSet;
use std::io::Write;

/// Formats diagnostics for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn header(&self, analyzer: &str) -> String {
        if self.use_color {
            style(analyzer).yellow().bold().force_styling(true).to_string()
        } else {
            analyzer.to_string()
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format(&self, diagnostics: &[Diagnostic], writer: &mut dyn Write) -> std::io::Result<()> {
        for diag in diagnostics {
            // Header line: analyzer: message
            writeln!(writer, "{}: {}", self.header(&diag.analyzer), diag.message)?;
            writeln!(
                writer,
                "  --> {} ({})",
                diag.file.display(),
                diag.location()
            )?;
            writeln!(writer)?;
        }

        if !diagnostics.is_empty() {
            let files: BTreeSet<_> = diagnostics.iter().map(|d| &d.file).collect();
            writeln!(
                writer,
                "Found {} issue(s) in {} file(s)",
                diagnostics.len(),
                files.len()
            )?;
        }

        Ok(())
    }
}
