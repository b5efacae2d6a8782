//! Analyzer registry and built-in analyzers.
//!
//! The analysis system consists of:
//!
//! - **Analyzers** - Individual inspections ([`Analyzer`] trait)
//! - **Initializers** - Name, default and constructor of each analyzer
//!   ([`AnalyzerInitializer`] trait)
//! - **Registry** - Ordered collection of initializers that resolves an
//!   enable/disable request into analyzers ([`Registry`])
//! - **Diagnostics** - Findings reported by analyzers ([`Diagnostic`])
//!
//! # Example
//!
//! ```
//! use kal::analysis::Registry;
//! use kal::config::{Linters, LintersConfig};
//!
//! let registry = Registry::with_builtins().unwrap();
//! assert!(registry.all_linters().contains("jsontags"));
//!
//! // Everything except nophase.
//! let linters = Linters::from_lists(["*"], ["nophase"]).unwrap();
//! let analyzers = registry
//!     .initialize_linters(&linters, &LintersConfig::default())
//!     .unwrap();
//! assert!(analyzers.iter().all(|a| a.name() != "nophase"));
//! ```

pub mod analyzers;
pub mod diagnostic;
pub mod initializer;
pub mod markers;
pub mod registry;
pub mod source;

pub use diagnostic::Diagnostic;
pub use initializer::{Analyzer, AnalyzerInitializer};
pub use registry::{builtin_initializers, Registry};
pub use source::{load_api_file, ApiField, ApiFile, ApiType, JsonTag};

/// Run every analyzer over every file.
///
/// Diagnostics are grouped by file, then by analyzer, in the order given.
pub fn run_analyzers(analyzers: &[Box<dyn Analyzer>], files: &[ApiFile]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for file in files {
        for analyzer in analyzers {
            let found = analyzer.run(file);
            tracing::debug!(
                "{} reported {} diagnostic(s) in {}",
                analyzer.name(),
                found.len(),
                file.path.display()
            );
            diagnostics.extend(found);
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Linters, LintersConfig};

    fn sample_file() -> ApiFile {
        ApiFile {
            path: "types.go".into(),
            types: vec![ApiType {
                name: "WidgetStatus".to_string(),
                fields: vec![ApiField {
                    name: "Phase".to_string(),
                    json_tag: Some("phase,omitempty".to_string()),
                    doc: vec!["phase is the current phase.".to_string()],
                    markers: vec!["optional".to_string()],
                }],
            }],
        }
    }

    #[test]
    fn runs_selected_analyzers_only() {
        let registry = Registry::with_builtins().unwrap();
        let analyzers = registry
            .initialize_linters(&Linters::default(), &LintersConfig::default())
            .unwrap();

        let diagnostics = run_analyzers(&analyzers, &[sample_file()]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].analyzer, "nophase");

        let linters = Linters::from_lists(Vec::<String>::new(), ["nophase"]).unwrap();
        let analyzers = registry
            .initialize_linters(&linters, &LintersConfig::default())
            .unwrap();
        assert!(run_analyzers(&analyzers, &[sample_file()]).is_empty());
    }

    #[test]
    fn analyzers_can_run_on_other_threads() {
        let registry = Registry::with_builtins().unwrap();
        let analyzers = registry
            .initialize_linters(&Linters::default(), &LintersConfig::default())
            .unwrap();
        let file = &sample_file();

        let counts: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = analyzers
                .iter()
                .map(|a| s.spawn(move || a.run(file).len()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(counts.iter().sum::<usize>(), 1);
    }
}
