//! Strict validation of the enable/disable lists.
//!
//! Resolution itself ignores unknown names and lets an explicit disable win
//! over an explicit enable. Callers that would rather reject such requests
//! run [`validate_linters`] first.

use crate::analysis::Registry;
use crate::config::{Linters, Selection};

use super::field::{ErrorList, FieldError, FieldPath};

/// Check that every named analyzer exists and none is both enabled and disabled.
pub fn validate_linters(linters: &Linters, registry: &Registry, path: &FieldPath) -> ErrorList {
    let mut errors = ErrorList::new();
    let known: Vec<String> = registry.all_linters().into_iter().collect();

    errors.append(check_known(
        &linters.enable,
        &known,
        &path.child("enable"),
    ));
    errors.append(check_known(
        &linters.disable,
        &known,
        &path.child("disable"),
    ));

    for name in linters.enable.names() {
        if linters.disable.names_explicitly(name) {
            errors.push(FieldError::invalid(
                path.child("enable"),
                name,
                "linter cannot be both enabled and disabled",
            ));
        }
    }

    errors
}

fn check_known(selection: &Selection, known: &[String], path: &FieldPath) -> ErrorList {
    selection
        .names()
        .filter(|name| !known.iter().any(|k| k == name))
        .map(|name| FieldError::not_supported(path.clone(), name, known))
        .collect()
}
