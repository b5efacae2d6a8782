//! Run command implementation.
//!
//! `kal run` validates the configuration, builds the selected analyzers and
//! runs them over the given API description files.

use std::io::Write;

use crate::analysis::{load_api_file, run_analyzers, ApiFile, Registry};
use crate::cli::args::RunArgs;
use crate::error::{KalError, Result};
use crate::output::formatter_for;
use crate::validation::validate_config;

use super::dispatcher::{Command, CommandResult, ConfigSource};
use super::validate::report_config_errors;

/// The run command implementation.
pub struct RunCommand<'a> {
    registry: &'a Registry,
    source: ConfigSource,
    args: RunArgs,
    use_color: bool,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command.
    pub fn new(registry: &'a Registry, source: ConfigSource, args: RunArgs) -> Self {
        Self {
            registry,
            source,
            args,
            use_color: false,
        }
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    fn load_files(&self) -> Result<Vec<ApiFile>> {
        self.args.files.iter().map(|p| load_api_file(p)).collect()
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = match self.source.load() {
            Ok(c) => c,
            Err(e @ KalError::ConfigParseError { .. }) => {
                writeln!(out, "{}", e)?;
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        // No analyzer is built while the config has errors.
        let errors = validate_config(&config, self.registry, self.args.strict);
        if !errors.is_empty() {
            report_config_errors(&errors, out)?;
            return Ok(CommandResult::failure(1));
        }

        let analyzers = self
            .registry
            .initialize_linters(&config.linters, &config.linters_config)?;
        tracing::debug!(
            "Running {} analyzer(s) over {} file(s)",
            analyzers.len(),
            self.args.files.len()
        );

        let files = self.load_files()?;
        let diagnostics = run_analyzers(&analyzers, &files);

        formatter_for(self.args.format, self.use_color).format(&diagnostics, out)?;

        if diagnostics.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
