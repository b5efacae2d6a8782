//! Diagnostic output formatters.
//!
//! This module provides formatters for writing analyzer diagnostics
//! in different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::analysis::Diagnostic;
use clap::ValueEnum;
use std::io::Write;

/// Output format for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting diagnostics.
pub trait LintFormatter {
    /// Format diagnostics to the given writer.
    fn format(&self, diagnostics: &[Diagnostic], writer: &mut dyn Write) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Formatter for `format`.
pub fn formatter_for(format: OutputFormat, use_color: bool) -> Box<dyn LintFormatter> {
    match format {
        OutputFormat::Human => Box::new(HumanFormatter::new(use_color)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
