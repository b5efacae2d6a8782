//! Validate command implementation.
//!
//! `kal validate` checks the configuration file and reports every problem
//! found, one per line.

use std::io::Write;

use crate::analysis::Registry;
use crate::cli::args::ValidateArgs;
use crate::error::{KalError, Result};
use crate::validation::{validate_config, ErrorList};

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// The validate command implementation.
pub struct ValidateCommand<'a> {
    registry: &'a Registry,
    source: ConfigSource,
    args: ValidateArgs,
}

impl<'a> ValidateCommand<'a> {
    /// Create a new validate command.
    pub fn new(registry: &'a Registry, source: ConfigSource, args: ValidateArgs) -> Self {
        Self {
            registry,
            source,
            args,
        }
    }
}

/// Write each error as one item followed by a count.
///
/// Multi-line details are indented under the line that starts the error.
pub(crate) fn report_config_errors(errors: &ErrorList, out: &mut dyn Write) -> Result<()> {
    for error in errors {
        writeln!(out, "{}", error.to_string().replace('\n', "\n    "))?;
    }
    writeln!(out, "Found {} configuration error(s)", errors.len())?;
    Ok(())
}

impl Command for ValidateCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = match self.source.load() {
            Ok(c) => c,
            Err(e @ KalError::ConfigParseError { .. }) => {
                writeln!(out, "{}", e)?;
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let errors = validate_config(&config, self.registry, self.args.strict);
        if errors.is_empty() {
            writeln!(out, "Configuration is valid!")?;
            return Ok(CommandResult::success());
        }

        report_config_errors(&errors, out)?;
        Ok(CommandResult::failure(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(config: &str, strict: bool) -> (CommandResult, String) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kal.yml");
        fs::write(&path, config).unwrap();
        let registry = Registry::with_builtins().unwrap();
        let source = ConfigSource {
            path: Some(path),
            project_root: temp.path().to_path_buf(),
        };
        let cmd = ValidateCommand::new(&registry, source, ValidateArgs { strict });

        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn valid_config() {
        let (result, output) = run("lintersConfig:\n  jsonTags:\n    jsonTagRegex: '^[a-z]+$'\n", false);
        assert!(result.success);
        assert!(output.contains("Configuration is valid!"));
    }

    #[test]
    fn reports_every_error() {
        let config = r#"
lintersConfig:
  jsonTags:
    jsonTagRegex: "(["
  optionalOrRequired:
    preferredOptionalMarker: invalid
"#;
        let (result, output) = run(config, false);

        assert_eq!(result.exit_code, 1);
        assert!(output.contains("lintersConfig.jsonTags.jsonTagRegex: Invalid value"));
        assert!(output.contains("lintersConfig.optionalOrRequired.preferredOptionalMarker"));
        assert!(output.contains("Found 2 configuration error(s)"));
    }

    #[test]
    fn multi_line_regex_error_stays_one_item() {
        let config = "lintersConfig:\n  jsonTags:\n    jsonTagRegex: \"([\"\n";
        let (result, output) = run(config, false);

        assert_eq!(result.exit_code, 1);
        let starts: Vec<&str> = output
            .lines()
            .filter(|l| !l.starts_with(' ') && !l.starts_with("Found "))
            .collect();
        assert_eq!(starts.len(), 1);
        assert!(starts[0].starts_with("lintersConfig.jsonTags.jsonTagRegex: Invalid value"));
        assert!(output.lines().count() > 2);
        assert!(output.ends_with("Found 1 configuration error(s)\n"));
    }

    #[test]
    fn strict_rejects_unknown_names() {
        let config = "linters:\n  enable: [nosuch]\n";

        let (lenient, _) = run(config, false);
        assert!(lenient.success);

        let (strict, output) = run(config, true);
        assert!(!strict.success);
        assert!(output.contains("linters.enable: Unsupported value: \"nosuch\""));
    }

    #[test]
    fn parse_errors_fail_without_panicking() {
        let (result, output) = run("linters:\n  enable: ['*', jsontags]\n", false);
        assert_eq!(result.exit_code, 1);
        assert!(output.contains("Failed to parse config"));
    }
}
