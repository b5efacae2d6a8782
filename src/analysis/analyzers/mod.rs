//! Built-in analyzers.
//!
//! Each module defines an analyzer and the initializer that registers it.

pub mod comment_start;
pub mod json_tags;
pub mod no_phase;
pub mod optional_or_required;

pub use comment_start::{CommentStartAnalyzer, CommentStartInitializer};
pub use json_tags::{JsonTagsAnalyzer, JsonTagsInitializer, DEFAULT_TAG_REGEX};
pub use no_phase::{NoPhaseAnalyzer, NoPhaseInitializer};
pub use optional_or_required::{OptionalOrRequiredAnalyzer, OptionalOrRequiredInitializer};
