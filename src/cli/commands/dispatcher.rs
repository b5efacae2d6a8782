//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::analysis::Registry;
use crate::cli::args::{Cli, Commands};
use crate::config::{load_config_or_default, Config};
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing user-facing output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where a command reads its configuration from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Explicit `--config` path.
    pub path: Option<PathBuf>,
    /// Directory searched for `.kal.yml`.
    pub project_root: PathBuf,
}

impl ConfigSource {
    /// Load the configuration.
    pub fn load(&self) -> Result<Config> {
        load_config_or_default(self.path.as_deref(), &self.project_root)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    registry: Registry,
    use_color: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, registry: Registry) -> Self {
        Self {
            project_root,
            registry,
            use_color: false,
        }
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        let source = ConfigSource {
            path: cli.config.clone(),
            project_root: self.project_root.clone(),
        };

        match &cli.command {
            Commands::Linters(args) => {
                let cmd = super::linters::LintersCommand::new(&self.registry, source, args.clone());
                cmd.execute(out)
            }
            Commands::Validate(args) => {
                let cmd =
                    super::validate::ValidateCommand::new(&self.registry, source, args.clone());
                cmd.execute(out)
            }
            Commands::Run(args) => {
                let cmd = super::run::RunCommand::new(&self.registry, source, args.clone())
                    .with_color(self.use_color);
                cmd.execute(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatches_linters_command() {
        let temp = TempDir::new().unwrap();
        let dispatcher =
            CommandDispatcher::new(temp.path().to_path_buf(), Registry::with_builtins().unwrap());
        let cli = Cli::parse_from(["kal", "linters"]);

        let mut out = Vec::new();
        let result = dispatcher.dispatch(&cli, &mut out).unwrap();

        assert!(result.success);
        assert!(String::from_utf8(out).unwrap().contains("jsontags"));
        assert_eq!(dispatcher.project_root(), temp.path());
    }
}
