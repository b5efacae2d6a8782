//! Command-line interface for kal.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, LintersArgs, RunArgs, ValidateArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
