//! Validation of per-analyzer settings.

use regex::Regex;

use crate::analysis::markers::{
    KUBEBUILDER_OPTIONAL_MARKER, KUBEBUILDER_REQUIRED_MARKER, OPTIONAL_MARKER, REQUIRED_MARKER,
};
use crate::config::{JsonTagsConfig, LintersConfig, OptionalOrRequiredConfig};

use super::field::{ErrorList, FieldError, FieldPath};

/// Accepted values for `optionalOrRequired.preferredOptionalMarker`.
pub const PREFERRED_OPTIONAL_MARKERS: [&str; 2] = [OPTIONAL_MARKER, KUBEBUILDER_OPTIONAL_MARKER];

/// Accepted values for `optionalOrRequired.preferredRequiredMarker`.
pub const PREFERRED_REQUIRED_MARKERS: [&str; 2] = [REQUIRED_MARKER, KUBEBUILDER_REQUIRED_MARKER];

/// Validate every analyzer section of `config`.
///
/// All sections are checked even when an earlier one fails, so the returned
/// list holds every problem in the config. `path` is the location of
/// `config` itself, e.g. `lintersConfig`.
pub fn validate_linters_config(config: &LintersConfig, path: &FieldPath) -> ErrorList {
    let mut errors = ErrorList::new();

    errors.append(validate_json_tags_config(
        &config.json_tags,
        &path.child("jsonTags"),
    ));
    errors.append(validate_optional_or_required_config(
        &config.optional_or_required,
        &path.child("optionalOrRequired"),
    ));

    tracing::debug!("Validated {}: {} error(s)", path, errors.len());
    errors
}

/// Validate the `jsontags` section.
pub fn validate_json_tags_config(config: &JsonTagsConfig, path: &FieldPath) -> ErrorList {
    let mut errors = ErrorList::new();

    if let Some(err) = check_pattern(&config.json_tag_regex, path.child("jsonTagRegex")) {
        errors.push(err);
    }

    errors
}

/// Validate the `optionalorrequired` section.
pub fn validate_optional_or_required_config(
    config: &OptionalOrRequiredConfig,
    path: &FieldPath,
) -> ErrorList {
    let mut errors = ErrorList::new();

    if let Some(err) = check_one_of(
        &config.preferred_optional_marker,
        &PREFERRED_OPTIONAL_MARKERS,
        path.child("preferredOptionalMarker"),
    ) {
        errors.push(err);
    }
    if let Some(err) = check_one_of(
        &config.preferred_required_marker,
        &PREFERRED_REQUIRED_MARKERS,
        path.child("preferredRequiredMarker"),
    ) {
        errors.push(err);
    }

    errors
}

/// Empty means "use the built-in default" and is always accepted.
fn check_pattern(value: &str, path: FieldPath) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    match Regex::new(value) {
        Ok(_) => None,
        Err(e) => Some(FieldError::invalid(
            path,
            value,
            format!("invalid regex: {}", e),
        )),
    }
}

fn check_one_of(value: &str, allowed: &[&str], path: FieldPath) -> Option<FieldError> {
    if value.is_empty() || allowed.contains(&value) {
        return None;
    }
    Some(FieldError::invalid(
        path,
        value,
        format!("invalid value, must be one of {}", one_of_or_omitted(allowed)),
    ))
}

/// `"a", "b" or omitted`
fn one_of_or_omitted(allowed: &[&str]) -> String {
    let quoted: Vec<String> = allowed.iter().map(|v| format!("{:?}", v)).collect();
    format!("{} or omitted", quoted.join(", "))
}
