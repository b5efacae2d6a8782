//! Configuration validation.
//!
//! Validation runs before any analyzer is created. Every check records its
//! failures in an [`ErrorList`] instead of returning early, so a single run
//! reports every problem in the config.
//!
//! - [`field`] - Field paths and field-attributed errors
//! - [`linters_config`] - Per-analyzer settings (patterns, marker names)
//! - [`linters`] - Opt-in strict checks of the enable/disable lists
//!
//! # Example
//!
//! ```
//! use kal::config::LintersConfig;
//! use kal::validation::{validate_linters_config, FieldPath};
//!
//! let mut config = LintersConfig::default();
//! config.optional_or_required.preferred_optional_marker = "invalid".to_string();
//!
//! let errors = validate_linters_config(&config, &FieldPath::new("lintersConfig"));
//! assert_eq!(errors.len(), 1);
//! assert!(errors
//!     .aggregate_message()
//!     .starts_with("lintersConfig.optionalOrRequired.preferredOptionalMarker"));
//! ```

pub mod field;
pub mod linters;
pub mod linters_config;

pub use field::{AggregateError, ErrorKind, ErrorList, FieldError, FieldPath};
pub use linters::validate_linters;
pub use linters_config::{
    validate_json_tags_config, validate_linters_config, validate_optional_or_required_config,
    PREFERRED_OPTIONAL_MARKERS, PREFERRED_REQUIRED_MARKERS,
};

use crate::analysis::Registry;
use crate::config::Config;

/// Validate a whole config file.
///
/// The `lintersConfig` section is always checked. With `strict` set the
/// `linters` lists are checked against `registry` as well.
pub fn validate_config(config: &Config, registry: &Registry, strict: bool) -> ErrorList {
    let mut errors = ErrorList::new();

    if strict {
        errors.append(validate_linters(
            &config.linters,
            registry,
            &FieldPath::new("linters"),
        ));
    }
    errors.append(validate_linters_config(
        &config.linters_config,
        &FieldPath::new("lintersConfig"),
    ));

    errors
}
