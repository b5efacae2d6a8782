//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], which also builds the analyzer registry
//! they share.

pub mod dispatcher;
pub mod linters;
pub mod run;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
