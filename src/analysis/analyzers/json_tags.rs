//! JSON tag checks.
//!
//! Every field needs a json tag, and serialized names must follow the
//! configured pattern (camelCase by default).

use regex::Regex;

use crate::analysis::{Analyzer, AnalyzerInitializer, ApiFile, Diagnostic};
use crate::config::LintersConfig;
use crate::error::{KalError, Result};

/// Registered name of this analyzer.
pub const NAME: &str = "jsontags";

/// Pattern used when `jsonTags.jsonTagRegex` is empty.
pub const DEFAULT_TAG_REGEX: &str = "^[a-z][a-z0-9]*(?:[A-Z][a-z0-9]*)*$";

/// Checks that json tags exist and match a naming pattern.
pub struct JsonTagsAnalyzer {
    pattern: Regex,
}

impl JsonTagsAnalyzer {
    /// Create an analyzer using `pattern`, or the default pattern when empty.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = if pattern.is_empty() {
            DEFAULT_TAG_REGEX
        } else {
            pattern
        };
        let pattern = Regex::new(pattern).map_err(|e| KalError::AnalyzerInit {
            name: NAME.to_string(),
            message: format!("invalid regex: {}", e),
        })?;
        Ok(Self { pattern })
    }
}

impl Analyzer for JsonTagsAnalyzer {
    fn name(&self) -> &str {
        NAME
    }

    fn doc(&self) -> &str {
        "Check that all struct fields in an API are tagged with json tags"
    }

    fn run(&self, file: &ApiFile) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for ty in &file.types {
            for field in &ty.fields {
                let report = |message: String| {
                    Diagnostic::new(NAME, &file.path, &ty.name, message).with_field(&field.name)
                };

                let Some(tag) = field.parsed_json_tag() else {
                    diagnostics.push(report(format!("field {} is missing json tag", field.name)));
                    continue;
                };

                if tag.is_inline() || tag.is_ignored() {
                    continue;
                }

                if tag.name.is_empty() {
                    diagnostics.push(report(format!("field {} has empty json tag", field.name)));
                    continue;
                }

                if !self.pattern.is_match(tag.name) {
                    diagnostics.push(report(format!(
                        "field {} json tag does not match pattern {:?}: {}",
                        field.name,
                        self.pattern.as_str(),
                        tag.name
                    )));
                }
            }
        }

        diagnostics
    }
}

/// Builds [`JsonTagsAnalyzer`] from `lintersConfig.jsonTags`. On by default.
pub struct JsonTagsInitializer;

impl AnalyzerInitializer for JsonTagsInitializer {
    fn name(&self) -> &str {
        NAME
    }

    fn default_enabled(&self) -> bool {
        true
    }

    fn init(&self, config: &LintersConfig) -> Result<Box<dyn Analyzer>> {
        Ok(Box::new(JsonTagsAnalyzer::new(
            &config.json_tags.json_tag_regex,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ApiField, ApiType};

    fn file_with(fields: Vec<ApiField>) -> ApiFile {
        ApiFile {
            path: "types.go".into(),
            types: vec![ApiType {
                name: "WidgetSpec".to_string(),
                fields,
            }],
        }
    }

    fn field(name: &str, tag: Option<&str>) -> ApiField {
        ApiField {
            name: name.to_string(),
            json_tag: tag.map(String::from),
            ..Default::default()
        }
    }

    fn run_default(fields: Vec<ApiField>) -> Vec<Diagnostic> {
        JsonTagsAnalyzer::new("").unwrap().run(&file_with(fields))
    }

    #[test]
    fn passes_camel_case_tags() {
        let diagnostics = run_default(vec![
            field("Replicas", Some("replicas,omitempty")),
            field("MaxSurge", Some("maxSurge")),
            field("IPv6Address", Some("ipv6Address")),
        ]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn reports_missing_tag() {
        let diagnostics = run_default(vec![field("Replicas", None)]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "field Replicas is missing json tag");
        assert_eq!(diagnostics[0].field.as_deref(), Some("Replicas"));
    }

    #[test]
    fn reports_empty_tag() {
        let diagnostics = run_default(vec![field("Replicas", Some(""))]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "field Replicas has empty json tag");
    }

    #[test]
    fn reports_non_matching_tag() {
        let diagnostics = run_default(vec![field("MaxSurge", Some("max_surge"))]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            format!(
                "field MaxSurge json tag does not match pattern {:?}: max_surge",
                DEFAULT_TAG_REGEX
            )
        );
    }

    #[test]
    fn skips_inline_and_ignored_fields() {
        let diagnostics = run_default(vec![
            field("TypeMeta", Some(",inline")),
            field("Internal", Some("-")),
        ]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn uses_configured_pattern() {
        let mut config = LintersConfig::default();
        config.json_tags.json_tag_regex = "^[a-z_]+$".to_string();
        let analyzer = JsonTagsInitializer.init(&config).unwrap();

        let diagnostics = analyzer.run(&file_with(vec![
            field("MaxSurge", Some("max_surge")),
            field("MaxUnavailable", Some("maxUnavailable")),
        ]));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].field.as_deref(), Some("MaxUnavailable"));
    }

    #[test]
    fn init_fails_on_invalid_pattern() {
        let mut config = LintersConfig::default();
        config.json_tags.json_tag_regex = "(".to_string();

        match JsonTagsInitializer.init(&config) {
            Err(KalError::AnalyzerInit { name, message }) => {
                assert_eq!(name, NAME);
                assert!(message.starts_with("invalid regex"));
            }
            _ => panic!("expected AnalyzerInit error"),
        }
    }
}
