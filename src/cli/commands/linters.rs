//! Linters command implementation.
//!
//! `kal linters` lists the registered analyzers, whether each is on by
//! default, and whether the current config turns it on.

use std::io::Write;

use serde::Serialize;

use crate::analysis::Registry;
use crate::cli::args::LintersArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// The linters command implementation.
pub struct LintersCommand<'a> {
    registry: &'a Registry,
    source: ConfigSource,
    args: LintersArgs,
}

#[derive(Serialize)]
struct LinterEntry<'a> {
    name: &'a str,
    default: bool,
    enabled: bool,
}

impl<'a> LintersCommand<'a> {
    /// Create a new linters command.
    pub fn new(registry: &'a Registry, source: ConfigSource, args: LintersArgs) -> Self {
        Self {
            registry,
            source,
            args,
        }
    }
}

impl Command for LintersCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = self.source.load()?;
        let enabled = self.registry.enabled_linters(&config.linters);

        let entries: Vec<LinterEntry<'_>> = self
            .registry
            .iter()
            .filter(|i| !self.args.default || i.default_enabled())
            .map(|i| LinterEntry {
                name: i.name(),
                default: i.default_enabled(),
                enabled: enabled.contains(&i.name()),
            })
            .collect();

        if self.args.json {
            serde_json::to_writer_pretty(&mut *out, &entries)
                .map_err(|e| anyhow::anyhow!("failed to write JSON: {}", e))?;
            writeln!(out)?;
            return Ok(CommandResult::success());
        }

        let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
        for entry in &entries {
            writeln!(
                out,
                "{:<width$}  default: {:<3}  enabled: {}",
                entry.name,
                if entry.default { "on" } else { "off" },
                if entry.enabled { "yes" } else { "no" },
                width = width
            )?;
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(config: Option<&str>, args: LintersArgs) -> String {
        let temp = TempDir::new().unwrap();
        if let Some(config) = config {
            fs::write(temp.path().join(".kal.yml"), config).unwrap();
        }
        let registry = Registry::with_builtins().unwrap();
        let source = ConfigSource {
            path: None,
            project_root: temp.path().to_path_buf(),
        };
        let cmd = LintersCommand::new(&registry, source, args);

        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        assert!(result.success);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_all_analyzers_in_registration_order() {
        let output = run(None, LintersArgs::default());
        let names: Vec<&str> = output
            .lines()
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["commentstart", "jsontags", "optionalorrequired", "nophase"]
        );
    }

    #[test]
    fn marks_disabled_analyzers() {
        let output = run(
            Some("linters:\n  disable: [nophase]\n"),
            LintersArgs::default(),
        );
        let nophase = output.lines().find(|l| l.starts_with("nophase")).unwrap();
        assert!(nophase.ends_with("enabled: no"));
    }

    #[test]
    fn json_output() {
        let output = run(
            Some("linters:\n  disable: ['*']\n  enable: [jsontags]\n"),
            LintersArgs {
                default: false,
                json: true,
            },
        );
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 4);
        let enabled: Vec<&str> = entries
            .iter()
            .filter(|e| e["enabled"] == true)
            .map(|e| e["name"].as_str().unwrap())
            .collect();
        assert_eq!(enabled, vec!["jsontags"]);
    }
}
