//! kal - Linter for Kubernetes-style API type definitions.
//!
//! kal runs a configurable set of analyzers over API types. The crate is
//! organised around three steps:
//!
//! 1. [`validation`] checks a [`config::Config`] and reports every problem,
//!    each attributed to the field it came from
//! 2. [`analysis::Registry`] turns the config's enable/disable lists into the
//!    analyzers to run
//! 3. the analyzers inspect [`analysis::ApiFile`]s and report
//!    [`analysis::Diagnostic`]s
//!
//! # Modules
//!
//! - [`analysis`] - Analyzer traits, registry and built-in analyzers
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration schema and loading
//! - [`error`] - Error types and result aliases
//! - [`output`] - Diagnostic formatters
//! - [`validation`] - Field-attributed configuration validation
//!
//! # Example
//!
//! ```
//! use kal::analysis::Registry;
//! use kal::config::Config;
//! use kal::validation::validate_config;
//!
//! let registry = Registry::with_builtins().unwrap();
//! let config: Config = serde_yaml::from_str(
//!     "linters:\n  enable: ['*']\n  disable: [commentstart]\n",
//! )
//! .unwrap();
//!
//! assert!(validate_config(&config, &registry, true).is_empty());
//!
//! let names = registry.enabled_linters(&config.linters);
//! assert_eq!(names, vec!["jsontags", "optionalorrequired", "nophase"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod validation;

pub use error::{KalError, Result};
