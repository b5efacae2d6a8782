//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// kal - Linter for Kubernetes-style API type definitions.
#[derive(Debug, Parser)]
#[command(name = "kal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .kal.yml)
    #[arg(short, long, global = true, env = "KAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List known analyzers
    Linters(LintersArgs),

    /// Validate the configuration file
    Validate(ValidateArgs),

    /// Run the configured analyzers over API description files
    Run(RunArgs),
}

/// Arguments for the `linters` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintersArgs {
    /// Only list analyzers that are on by default
    #[arg(long)]
    pub default: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Also reject unknown analyzer names and names both enabled and disabled
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Also reject unknown analyzer names and names both enabled and disabled
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// API description files (YAML or JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
