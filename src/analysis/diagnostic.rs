//! Findings reported by analyzers.

use std::fmt;
use std::path::PathBuf;

/// A problem found by an analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the analyzer that produced this diagnostic.
    pub analyzer: String,
    /// File the offending type was declared in.
    pub file: PathBuf,
    /// Type containing the offending field.
    pub type_name: String,
    /// Offending field, if the problem is field-specific.
    pub field: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic for a type.
    pub fn new(
        analyzer: impl Into<String>,
        file: impl Into<PathBuf>,
        type_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            analyzer: analyzer.into(),
            file: file.into(),
            type_name: type_name.into(),
            field: None,
            message: message.into(),
        }
    }

    /// Attribute this diagnostic to a field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// `Type` or `Type.Field`.
    pub fn location(&self) -> String {
        match self.field {
            Some(ref field) => format!("{}.{}", self.type_name, field),
            None => self.type_name.clone(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {} ({})",
            self.file.display(),
            self.location(),
            self.message,
            self.analyzer
        )
    }
}
