//! Configuration schema definitions for kal.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format:
//!
//! ```yaml
//! linters:
//!   enable: ["*"]
//!   disable: ["nophase"]
//! lintersConfig:
//!   jsonTags:
//!     jsonTagRegex: "^[a-z][a-zA-Z0-9]*$"
//!   optionalOrRequired:
//!     preferredOptionalMarker: optional
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// Reserved name that selects every known analyzer.
pub const WILDCARD: &str = "*";

/// Root configuration structure for `.kal.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Which analyzers to run.
    pub linters: Linters,

    /// Per-analyzer settings.
    pub linters_config: LintersConfig,
}

/// Enable/disable lists for analyzers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Linters {
    /// Analyzers to enable in addition to the defaults.
    pub enable: Selection,

    /// Analyzers to disable. Explicit names here always win.
    pub disable: Selection,
}

impl Linters {
    /// Build a request from raw name lists.
    ///
    /// Returns `None` when either list mixes the wildcard with concrete names.
    pub fn from_lists<E, D>(enable: E, disable: D) -> Option<Self>
    where
        E: IntoIterator,
        E::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Some(Self {
            enable: Selection::from_names(enable)?,
            disable: Selection::from_names(disable)?,
        })
    }
}

/// A set of analyzer names, or the wildcard meaning "every analyzer".
///
/// Serialized as a plain list; `["*"]` is [`Selection::All`]. A list mixing
/// `"*"` with concrete names does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every registered analyzer.
    All,
    /// Exactly these names. Unknown names are allowed and match nothing.
    Names(BTreeSet<String>),
}

impl Selection {
    /// An empty selection.
    pub fn none() -> Self {
        Selection::Names(BTreeSet::new())
    }

    /// Build a selection from a list of names.
    pub fn from_names<I>(names: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if !names.contains(WILDCARD) {
            return Some(Selection::Names(names));
        }
        if names.len() == 1 {
            Some(Selection::All)
        } else {
            None
        }
    }

    /// Whether this is the wildcard.
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Whether `name` is listed explicitly. The wildcard lists nothing.
    pub fn names_explicitly(&self, name: &str) -> bool {
        match self {
            Selection::All => false,
            Selection::Names(names) => names.contains(name),
        }
    }

    /// Iterate over explicitly listed names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let names = match self {
            Selection::All => None,
            Selection::Names(names) => Some(names.iter().map(String::as_str)),
        };
        names.into_iter().flatten()
    }

    /// Whether no name is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::All => false,
            Selection::Names(names) => names.is_empty(),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::none()
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.collect_seq([WILDCARD]),
            Selection::Names(names) => serializer.collect_seq(names),
        }
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let names = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
        Selection::from_names(names).ok_or_else(|| {
            D::Error::custom(format!(
                "wildcard \"{WILDCARD}\" cannot be combined with other linter names"
            ))
        })
    }
}

/// Settings for each analyzer family. Each analyzer reads only its own section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LintersConfig {
    /// Settings for the `jsontags` analyzer.
    pub json_tags: JsonTagsConfig,

    /// Settings for the `optionalorrequired` analyzer.
    pub optional_or_required: OptionalOrRequiredConfig,
}

/// Settings for the `jsontags` analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsonTagsConfig {
    /// Pattern json tag names must match. Empty uses the camelCase default.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_tag_regex: String,
}

/// Settings for the `optionalorrequired` analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionalOrRequiredConfig {
    /// Marker to use for optional fields. Empty means `optional`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preferred_optional_marker: String,

    /// Marker to use for required fields. Empty means `required`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preferred_required_marker: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wildcard_alone_is_all() {
        assert_eq!(Selection::from_names(["*"]), Some(Selection::All));
    }

    #[test]
    fn selection_mixed_wildcard_is_rejected() {
        assert_eq!(Selection::from_names(["*", "jsontags"]), None);
    }

    #[test]
    fn selection_empty_is_empty_names() {
        let sel = Selection::from_names(Vec::<String>::new()).unwrap();
        assert!(sel.is_empty());
        assert!(!sel.is_all());
    }

    #[test]
    fn wildcard_names_nothing_explicitly() {
        assert!(!Selection::All.names_explicitly("jsontags"));
        assert_eq!(Selection::All.names().count(), 0);
    }

    #[test]
    fn deserializes_full_config() {
        let yaml = r#"
linters:
  enable: ["*"]
  disable: [nophase]
lintersConfig:
  jsonTags:
    jsonTagRegex: "^[a-z]+$"
  optionalOrRequired:
    preferredOptionalMarker: optional
    preferredRequiredMarker: kubebuilder:validation:Required
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.linters.enable, Selection::All);
        assert!(config.linters.disable.names_explicitly("nophase"));
        assert_eq!(config.linters_config.json_tags.json_tag_regex, "^[a-z]+$");
        assert_eq!(
            config
                .linters_config
                .optional_or_required
                .preferred_required_marker,
            "kubebuilder:validation:Required"
        );
    }

    #[test]
    fn deserializes_empty_document() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn null_list_is_empty_selection() {
        let linters: Linters = serde_yaml::from_str("enable: ~").unwrap();
        assert!(linters.enable.is_empty());
    }

    #[test]
    fn rejects_mixed_wildcard_in_yaml() {
        let result: std::result::Result<Linters, _> =
            serde_yaml::from_str("enable: ['*', jsontags]");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("cannot be combined"));
    }

    #[test]
    fn selection_serializes_as_list() {
        let linters = Linters::from_lists(["*"], ["b", "a"]).unwrap();
        let json = serde_json::to_string(&linters).unwrap();
        assert_eq!(json, r#"{"enable":["*"],"disable":["a","b"]}"#);
    }
}
