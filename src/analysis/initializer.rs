//! Analyzer and initializer traits.
//!
//! - [`Analyzer`] - A configured inspection that runs over API types
//! - [`AnalyzerInitializer`] - Registration record that names an analyzer,
//!   says whether it runs by default, and builds it from configuration

use super::diagnostic::Diagnostic;
use super::source::ApiFile;
use crate::config::LintersConfig;
use crate::error::Result;

/// A configured inspection over API types.
///
/// Analyzers are built by their [`AnalyzerInitializer`] for one inspection
/// pass and hold no reference back to the registry, so a driver is free to
/// move them to other threads.
pub trait Analyzer: Send + Sync {
    /// Name of the analyzer. Matches its initializer's name.
    fn name(&self) -> &str;

    /// One-line description of what this analyzer checks.
    fn doc(&self) -> &str;

    /// Inspect every type in `file` and return any diagnostics.
    fn run(&self, file: &ApiFile) -> Vec<Diagnostic>;
}

/// Creates an [`Analyzer`] from configuration.
pub trait AnalyzerInitializer: Send + Sync {
    /// Name of the analyzer this initializer creates. Unique within a registry.
    fn name(&self) -> &str;

    /// Whether the analyzer runs when the config does not mention it.
    fn default_enabled(&self) -> bool;

    /// Create the analyzer.
    ///
    /// The complete [`LintersConfig`] is passed in; each initializer reads
    /// only its own section.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerInit` when its section cannot be used. Configs that
    /// passed validation never fail here.
    fn init(&self, config: &LintersConfig) -> Result<Box<dyn Analyzer>>;
}
