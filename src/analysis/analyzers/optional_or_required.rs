//! Optional/required marker checks.
//!
//! Every serialized field must say whether it is optional or required, using
//! exactly one of the two and preferably the configured spelling.

use crate::analysis::markers::{
    KUBEBUILDER_OPTIONAL_MARKER, KUBEBUILDER_REQUIRED_MARKER, OPTIONAL_MARKER, REQUIRED_MARKER,
};
use crate::analysis::{Analyzer, AnalyzerInitializer, ApiField, ApiFile, Diagnostic};
use crate::config::LintersConfig;
use crate::error::{KalError, Result};

/// Registered name of this analyzer.
pub const NAME: &str = "optionalorrequired";

/// Checks optional/required markers on every field.
pub struct OptionalOrRequiredAnalyzer {
    preferred_optional: &'static str,
    secondary_optional: &'static str,
    preferred_required: &'static str,
    secondary_required: &'static str,
}

impl OptionalOrRequiredAnalyzer {
    /// Create an analyzer preferring the given markers. Empty selects the
    /// short `optional` / `required` markers.
    pub fn new(preferred_optional: &str, preferred_required: &str) -> Result<Self> {
        let (preferred_optional, secondary_optional) = pick_pair(
            preferred_optional,
            OPTIONAL_MARKER,
            KUBEBUILDER_OPTIONAL_MARKER,
        )?;
        let (preferred_required, secondary_required) = pick_pair(
            preferred_required,
            REQUIRED_MARKER,
            KUBEBUILDER_REQUIRED_MARKER,
        )?;
        Ok(Self {
            preferred_optional,
            secondary_optional,
            preferred_required,
            secondary_required,
        })
    }

    fn check_field(&self, field: &ApiField) -> Option<String> {
        let has_optional =
            field.has_marker(self.preferred_optional) || field.has_marker(self.secondary_optional);
        let has_required =
            field.has_marker(self.preferred_required) || field.has_marker(self.secondary_required);

        match (has_optional, has_required) {
            (true, true) => Some(format!(
                "field {} must not be marked as both optional and required",
                field.name
            )),
            (false, false) => Some(format!(
                "field {} must be marked as optional or required",
                field.name
            )),
            (true, false) => {
                self.check_preferred(field, self.preferred_optional, self.secondary_optional)
            }
            (false, true) => {
                self.check_preferred(field, self.preferred_required, self.secondary_required)
            }
        }
    }

    fn check_preferred(
        &self,
        field: &ApiField,
        preferred: &str,
        secondary: &str,
    ) -> Option<String> {
        if !field.has_marker(secondary) {
            return None;
        }
        if field.has_marker(preferred) {
            Some(format!(
                "field {} should use only the marker {}, {} is not required",
                field.name, preferred, secondary
            ))
        } else {
            Some(format!(
                "field {} should use marker {} instead of {}",
                field.name, preferred, secondary
            ))
        }
    }
}

/// Returns `(preferred, secondary)`.
fn pick_pair(
    configured: &str,
    short: &'static str,
    kubebuilder: &'static str,
) -> Result<(&'static str, &'static str)> {
    if configured.is_empty() || configured == short {
        Ok((short, kubebuilder))
    } else if configured == kubebuilder {
        Ok((kubebuilder, short))
    } else {
        Err(KalError::AnalyzerInit {
            name: NAME.to_string(),
            message: format!("unknown preferred marker {:?}", configured),
        })
    }
}

impl Analyzer for OptionalOrRequiredAnalyzer {
    fn name(&self) -> &str {
        NAME
    }

    fn doc(&self) -> &str {
        "Checks that all struct fields are marked either with the optional or required markers"
    }

    fn run(&self, file: &ApiFile) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for ty in &file.types {
            for field in &ty.fields {
                if field.serialized_name().is_none() {
                    continue;
                }
                if let Some(message) = self.check_field(field) {
                    diagnostics.push(
                        Diagnostic::new(NAME, &file.path, &ty.name, message)
                            .with_field(&field.name),
                    );
                }
            }
        }

        diagnostics
    }
}

/// Builds [`OptionalOrRequiredAnalyzer`] from `lintersConfig.optionalOrRequired`.
/// On by default.
pub struct OptionalOrRequiredInitializer;

impl AnalyzerInitializer for OptionalOrRequiredInitializer {
    fn name(&self) -> &str {
        NAME
    }

    fn default_enabled(&self) -> bool {
        true
    }

    fn init(&self, config: &LintersConfig) -> Result<Box<dyn Analyzer>> {
        let cfg = &config.optional_or_required;
        Ok(Box::new(OptionalOrRequiredAnalyzer::new(
            &cfg.preferred_optional_marker,
            &cfg.preferred_required_marker,
        )?))
    }
}
