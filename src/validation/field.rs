//! Field-attributed validation errors.
//!
//! A [`FieldError`] points at one configuration field through a
//! [`FieldPath`]. Validators push errors onto an [`ErrorList`] and never stop
//! early; the list is only collapsed into a single message by
//! [`ErrorList::to_aggregate`] when it is about to be shown to a user.

use std::fmt;

use crate::error::{KalError, Result};

/// Path to a configuration field, e.g. `lintersConfig.jsonTags.jsonTagRegex`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Field(String),
    Index(usize),
}

impl FieldPath {
    /// Create a path rooted at `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Field(name.into())],
        }
    }

    /// Path to a named child field.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.segments.push(Segment::Field(name.into()));
        path
    }

    /// Path to an element of a list field.
    pub fn index(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.segments.push(Segment::Index(index));
        path
    }

    /// The last field name in the path.
    pub fn leaf(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|s| match s {
            Segment::Field(name) => Some(name.as_str()),
            Segment::Index(_) => None,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => write!(f, "{}", name)?,
                Segment::Field(name) => write!(f, ".{}", name)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Kind of validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The value is malformed.
    Invalid,
    /// The value is well-formed but not one of the accepted values.
    NotSupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Invalid => write!(f, "Invalid value"),
            ErrorKind::NotSupported => write!(f, "Unsupported value"),
        }
    }
}

/// A single validation failure attributed to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Field the error is attributed to.
    pub field: FieldPath,
    /// The offending value, as written in the config.
    pub bad_value: String,
    /// Human-readable explanation.
    pub detail: String,
}

impl FieldError {
    /// A malformed value.
    pub fn invalid(field: FieldPath, value: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Invalid,
            field,
            bad_value: value.into(),
            detail: detail.into(),
        }
    }

    /// A value outside a closed set. `supported` is listed in the message in order.
    pub fn not_supported<S: AsRef<str>>(
        field: FieldPath,
        value: impl Into<String>,
        supported: &[S],
    ) -> Self {
        let quoted: Vec<String> = supported
            .iter()
            .map(|s| format!("{:?}", s.as_ref()))
            .collect();
        Self {
            kind: ErrorKind::NotSupported,
            field,
            bad_value: value.into(),
            detail: format!("supported values: {}", quoted.join(", ")),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {:?}: {}",
            self.field, self.kind, self.bad_value, self.detail
        )
    }
}

impl std::error::Error for FieldError {}

/// Ordered collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList(Vec<FieldError>);

impl ErrorList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add an error.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Append every error from `other`, keeping order.
    pub fn append(&mut self, other: ErrorList) {
        self.0.extend(other.0);
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no errors were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the errors in the order they were found.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Collapse the list into one error, or `None` if it is empty.
    pub fn to_aggregate(&self) -> Option<AggregateError> {
        if self.0.is_empty() {
            return None;
        }
        let mut messages: Vec<String> = Vec::with_capacity(self.0.len());
        for error in &self.0 {
            let msg = error.to_string();
            if !messages.contains(&msg) {
                messages.push(msg);
            }
        }
        Some(AggregateError { messages })
    }

    /// The aggregate message, or an empty string when there are no errors.
    pub fn aggregate_message(&self) -> String {
        self.to_aggregate()
            .map(|agg| agg.to_string())
            .unwrap_or_default()
    }

    /// `Ok(())` when empty, otherwise [`KalError::InvalidConfig`] holding the list.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(KalError::InvalidConfig { errors: self })
        }
    }
}

impl Extend<FieldError> for ErrorList {
    fn extend<T: IntoIterator<Item = FieldError>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ErrorList {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<FieldError> for ErrorList {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Several field errors rendered as one.
///
/// One error renders as its own message; several render as
/// `[first, second, ...]` with duplicates dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateError {
    messages: Vec<String>,
}

impl AggregateError {
    /// The individual messages, deduplicated.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.messages.as_slice() {
            return write!(f, "{}", only);
        }
        write!(f, "[{}]", self.messages.join(", "))
    }
}

impl std::error::Error for AggregateError {}
