//! Error types for kal operations.
//!
//! This module defines [`KalError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration problems are collected exhaustively into an
//!   [`ErrorList`](crate::validation::ErrorList) and surface as
//!   [`KalError::InvalidConfig`] only once validation is complete
//! - Registration problems ([`KalError::DuplicateAnalyzer`],
//!   [`KalError::EmptyAnalyzerName`]) are wiring defects and abort startup
//! - Use `anyhow::Error` (via `KalError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ErrorList;

/// Core error type for kal operations.
#[derive(Debug, Error)]
pub enum KalError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to parse an API description file.
    #[error("Failed to parse API description at {path}: {message}")]
    SourceParseError { path: PathBuf, message: String },

    /// Configuration failed validation. Holds every error found.
    #[error("Invalid configuration: {}", errors.aggregate_message())]
    InvalidConfig { errors: ErrorList },

    /// Two initializers were registered under the same name.
    #[error("Analyzer '{name}' is registered more than once")]
    DuplicateAnalyzer { name: String },

    /// An initializer was registered with an empty name.
    #[error("Analyzer registered with an empty name")]
    EmptyAnalyzerName,

    /// An analyzer factory rejected its configuration.
    #[error("Failed to initialize analyzer '{name}': {message}")]
    AnalyzerInit { name: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for kal operations.
pub type Result<T> = std::result::Result<T, KalError>;
