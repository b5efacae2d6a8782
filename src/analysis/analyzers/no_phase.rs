//! Phase field checks.

use crate::analysis::{Analyzer, AnalyzerInitializer, ApiField, ApiFile, Diagnostic};
use crate::config::LintersConfig;
use crate::error::Result;

/// Registered name of this analyzer.
pub const NAME: &str = "nophase";

/// Reports phase-like fields, which should be conditions instead.
pub struct NoPhaseAnalyzer;

impl NoPhaseAnalyzer {
    fn is_phase(field: &ApiField) -> bool {
        let ends_with_phase = |s: &str| s.to_ascii_lowercase().ends_with("phase");
        ends_with_phase(field.name.as_str()) || field.serialized_name().is_some_and(ends_with_phase)
    }
}

impl Analyzer for NoPhaseAnalyzer {
    fn name(&self) -> &str {
        NAME
    }

    fn doc(&self) -> &str {
        "phase fields are deprecated and conditions should be preferred, avoid phase like enum fields"
    }

    fn run(&self, file: &ApiFile) -> Vec<Diagnostic> {
        file.types
            .iter()
            .flat_map(|ty| {
                ty.fields
                    .iter()
                    .filter(|f| Self::is_phase(f))
                    .map(move |f| {
                        Diagnostic::new(
                            NAME,
                            &file.path,
                            &ty.name,
                            format!(
                                "field {}: phase fields are deprecated and conditions should be preferred, avoid phase like enum fields",
                                f.name
                            ),
                        )
                        .with_field(&f.name)
                    })
            })
            .collect()
    }
}

/// Builds [`NoPhaseAnalyzer`]. Takes no settings. On by default.
pub struct NoPhaseInitializer;

impl AnalyzerInitializer for NoPhaseInitializer {
    fn name(&self) -> &str {
        NAME
    }

    fn default_enabled(&self) -> bool {
        true
    }

    fn init(&self, _config: &LintersConfig) -> Result<Box<dyn Analyzer>> {
        Ok(Box::new(NoPhaseAnalyzer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ApiType;

    fn field(name: &str, tag: &str) -> ApiField {
        ApiField {
            name: name.to_string(),
            json_tag: Some(tag.to_string()),
            markers: vec!["optional".to_string()],
            ..Default::default()
        }
    }

    fn run(fields: Vec<ApiField>) -> Vec<Diagnostic> {
        let file = ApiFile {
            path: "a.go".into(),
            types: vec![ApiType {
                name: "NoPhaseTestStruct".to_string(),
                fields,
            }],
        };
        NoPhaseAnalyzer.run(&file)
    }

    #[test]
    fn reports_phase_field() {
        let diagnostics = run(vec![field("Phase", "phase,omitempty")]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "field Phase: phase fields are deprecated and conditions should be preferred, avoid phase like enum fields"
        );
    }

    #[test]
    fn reports_sub_phase_field() {
        let diagnostics = run(vec![field("FooPhase", "fooPhase,omitempty")]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].field.as_deref(), Some("FooPhase"));
    }

    #[test]
    fn reports_serialized_phase_name() {
        let diagnostics = run(vec![field("FooField", "fooPhase,omitempty")]);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.starts_with("field FooField:"));
    }

    #[test]
    fn ignores_other_fields() {
        let diagnostics = run(vec![
            field("Conditions", "conditions,omitempty"),
            field("Phases", "phases"),
        ]);
        assert!(diagnostics.is_empty());
    }
}
