//! Configuration loading and schema for kal.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! Validation lives in [`crate::validation`] so that it can be run against a
//! config built in code as well as one read from disk.
//!
//! # Example
//!
//! ```
//! use kal::config::{Config, Selection};
//!
//! let config: Config = serde_yaml::from_str("linters:\n  enable: ['*']\n").unwrap();
//! assert_eq!(config.linters.enable, Selection::All);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_config, load_config, load_config_or_default, parse_config, DEFAULT_CONFIG_FILE,
};
pub use schema::{
    Config, JsonTagsConfig, Linters, LintersConfig, OptionalOrRequiredConfig, Selection, WILDCARD,
};
