//! Analyzer registry.
//!
//! The [`Registry`] holds the ordered set of known analyzer initializers and
//! decides which analyzers a given enable/disable request turns on.
//!
//! A registry is built once, up front, and only read afterwards. All query
//! methods take `&self`, so a single registry can be shared between threads.

use std::collections::{BTreeSet, HashSet};

use super::analyzers::{
    CommentStartInitializer, JsonTagsInitializer, NoPhaseInitializer,
    OptionalOrRequiredInitializer,
};
use super::initializer::{Analyzer, AnalyzerInitializer};
use crate::config::{Linters, LintersConfig};
use crate::error::{KalError, Result};

/// Registry of analyzer initializers, in registration order.
pub struct Registry {
    initializers: Vec<Box<dyn AnalyzerInitializer>>,
}

impl Registry {
    /// Create a registry from `initializers`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAnalyzer` if two initializers share a name and
    /// `EmptyAnalyzerName` if any name is empty.
    pub fn new(initializers: Vec<Box<dyn AnalyzerInitializer>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for initializer in &initializers {
            let name = initializer.name();
            if name.is_empty() {
                return Err(KalError::EmptyAnalyzerName);
            }
            if !seen.insert(name) {
                return Err(KalError::DuplicateAnalyzer {
                    name: name.to_string(),
                });
            }
        }
        tracing::debug!("Registered {} analyzer(s)", initializers.len());
        Ok(Self { initializers })
    }

    /// Create a registry with all built-in analyzers.
    pub fn with_builtins() -> Result<Self> {
        Self::new(builtin_initializers())
    }

    /// Names of every registered analyzer.
    pub fn all_linters(&self) -> BTreeSet<String> {
        self.initializers
            .iter()
            .map(|i| i.name().to_string())
            .collect()
    }

    /// Names of analyzers that run unless disabled.
    pub fn default_linters(&self) -> BTreeSet<String> {
        self.initializers
            .iter()
            .filter(|i| i.default_enabled())
            .map(|i| i.name().to_string())
            .collect()
    }

    /// Get an initializer by name.
    pub fn get(&self, name: &str) -> Option<&dyn AnalyzerInitializer> {
        self.initializers
            .iter()
            .find(|i| i.name() == name)
            .map(|i| i.as_ref())
    }

    /// Iterate over initializers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn AnalyzerInitializer> {
        self.initializers.iter().map(|i| i.as_ref())
    }

    /// Get the number of registered analyzers.
    pub fn len(&self) -> usize {
        self.initializers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.initializers.is_empty()
    }

    /// Create the analyzers selected by `linters`, in registration order.
    ///
    /// An analyzer named in `disable` never runs. Otherwise it runs when
    /// `enable` is the wildcard, when it is named in `enable`, or when it is
    /// on by default and `disable` is not the wildcard. Names that match no
    /// analyzer are ignored.
    ///
    /// `config` is expected to have passed validation already.
    ///
    /// # Errors
    ///
    /// Only errors returned by an initializer are propagated.
    pub fn initialize_linters(
        &self,
        linters: &Linters,
        config: &LintersConfig,
    ) -> Result<Vec<Box<dyn Analyzer>>> {
        let mut analyzers = Vec::new();

        for initializer in &self.initializers {
            if !is_selected(initializer.as_ref(), linters) {
                continue;
            }
            tracing::debug!("Initializing analyzer {}", initializer.name());
            analyzers.push(initializer.init(config)?);
        }

        Ok(analyzers)
    }

    /// Names of the analyzers `linters` selects, in registration order.
    pub fn enabled_linters(&self, linters: &Linters) -> Vec<&str> {
        self.initializers
            .iter()
            .filter(|i| is_selected(i.as_ref(), linters))
            .map(|i| i.name())
            .collect()
    }
}

fn is_selected(initializer: &dyn AnalyzerInitializer, linters: &Linters) -> bool {
    let name = initializer.name();
    if linters.disable.names_explicitly(name) {
        tracing::trace!("Analyzer {} explicitly disabled", name);
        return false;
    }
    linters.enable.is_all()
        || linters.enable.names_explicitly(name)
        || (!linters.disable.is_all() && initializer.default_enabled())
}

/// The built-in initializers, in the order they are registered.
pub fn builtin_initializers() -> Vec<Box<dyn AnalyzerInitializer>> {
    vec![
        Box::new(CommentStartInitializer),
        Box::new(JsonTagsInitializer),
        Box::new(OptionalOrRequiredInitializer),
        Box::new(NoPhaseInitializer),
    ]
}
