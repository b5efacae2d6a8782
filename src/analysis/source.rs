//! Description of the API types being inspected.
//!
//! Go source is parsed elsewhere; analyzers receive the already-extracted
//! types, fields, tags, comments and markers in this form. The structs are
//! serde-deserializable so a description can be read from YAML or JSON:
//!
//! ```yaml
//! types:
//!   - name: WidgetSpec
//!     fields:
//!       - name: Replicas
//!         jsonTag: "replicas,omitempty"
//!         doc: ["replicas is the desired number of widgets."]
//!         markers: ["optional"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{KalError, Result};

/// One source file worth of API types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiFile {
    /// Where the types were defined. Used for reporting only.
    pub path: PathBuf,

    /// Struct types declared in the file.
    pub types: Vec<ApiType>,
}

/// A struct type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiType {
    /// Go type name.
    pub name: String,

    /// Fields in declaration order.
    pub fields: Vec<ApiField>,
}

/// A struct field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiField {
    /// Go field name.
    pub name: String,

    /// Raw value of the `json` struct tag, e.g. `phase,omitempty`.
    /// `None` when the field has no json tag at all.
    pub json_tag: Option<String>,

    /// Doc comment lines, without the leading `//`.
    pub doc: Vec<String>,

    /// Markers attached to the field, e.g. `optional` or
    /// `kubebuilder:validation:MinLength=1`. A leading `+` is ignored.
    pub markers: Vec<String>,
}

/// Parsed form of a `json` struct tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonTag<'a> {
    /// Serialized name; empty when only options were given.
    pub name: &'a str,
    /// Options after the name, e.g. `omitempty`.
    pub options: Vec<&'a str>,
}

impl<'a> JsonTag<'a> {
    /// Split a raw tag value into name and options.
    pub fn parse(raw: &'a str) -> Self {
        let mut parts = raw.split(',');
        let name = parts.next().unwrap_or_default().trim();
        let options = parts.map(str::trim).filter(|o| !o.is_empty()).collect();
        Self { name, options }
    }

    /// The field's members are serialized into the parent object.
    pub fn is_inline(&self) -> bool {
        self.options.contains(&"inline")
    }

    /// The field is never serialized (`json:"-"`).
    pub fn is_ignored(&self) -> bool {
        self.name == "-"
    }
}

impl ApiField {
    /// The parsed json tag, if the field has one.
    pub fn parsed_json_tag(&self) -> Option<JsonTag<'_>> {
        self.json_tag.as_deref().map(JsonTag::parse)
    }

    /// Serialized name of a field that appears under its own key.
    ///
    /// `None` for fields without a json tag, with an empty name, inlined, or ignored.
    pub fn serialized_name(&self) -> Option<&str> {
        let tag = self.parsed_json_tag()?;
        if tag.is_inline() || tag.is_ignored() || tag.name.is_empty() {
            None
        } else {
            Some(tag.name)
        }
    }

    /// Whether the field carries `marker`, ignoring any `=value` part.
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| marker_id(m) == marker)
    }

    /// Doc comment lines with surrounding blank lines dropped.
    pub fn doc_text(&self) -> Option<String> {
        let lines: Vec<&str> = self
            .doc
            .iter()
            .map(|l| l.trim())
            .skip_while(|l| l.is_empty())
            .collect();
        let text = lines.join("\n");
        let text = text.trim_end();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

fn marker_id(marker: &str) -> &str {
    let marker = marker.trim().trim_start_matches('+');
    marker.split('=').next().unwrap_or(marker).trim()
}

/// Read an API description from a YAML or JSON file.
///
/// When the document does not name its own `path`, the file path is used.
pub fn load_api_file(path: &Path) -> Result<ApiFile> {
    let content = std::fs::read_to_string(path)?;
    let mut file: ApiFile =
        serde_yaml::from_str(&content).map_err(|e| KalError::SourceParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    if file.path.as_os_str().is_empty() {
        file.path = path.to_path_buf();
    }
    tracing::debug!("Loaded {} type(s) from {}", file.types.len(), path.display());
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn field(json_tag: Option<&str>) -> ApiField {
        ApiField {
            name: "Foo".to_string(),
            json_tag: json_tag.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn parses_name_and_options() {
        let tag = JsonTag::parse("phase,omitempty");
        assert_eq!(tag.name, "phase");
        assert_eq!(tag.options, vec!["omitempty"]);
        assert!(!tag.is_inline());
    }

    #[test]
    fn parses_inline_tag() {
        let tag = JsonTag::parse(",inline");
        assert_eq!(tag.name, "");
        assert!(tag.is_inline());
    }

    #[test]
    fn serialized_name_skips_unserialized_fields() {
        assert_eq!(field(Some("foo,omitempty")).serialized_name(), Some("foo"));
        assert_eq!(field(Some("-")).serialized_name(), None);
        assert_eq!(field(Some(",inline")).serialized_name(), None);
        assert_eq!(field(None).serialized_name(), None);
    }

    #[test]
    fn has_marker_ignores_plus_and_value() {
        let f = ApiField {
            markers: vec![
                "+optional".to_string(),
                "kubebuilder:validation:MinLength=1".to_string(),
            ],
            ..Default::default()
        };
        assert!(f.has_marker("optional"));
        assert!(f.has_marker("kubebuilder:validation:MinLength"));
        assert!(!f.has_marker("required"));
    }

    #[test]
    fn doc_text_trims_blank_lines() {
        let f = ApiField {
            doc: vec![
                "".to_string(),
                " foo is a thing.".to_string(),
                "".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(f.doc_text().as_deref(), Some("foo is a thing."));
        assert_eq!(ApiField::default().doc_text(), None);
    }

    #[test]
    fn loads_yaml_description_and_fills_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types.yml");
        fs::write(
            &path,
            r#"
types:
  - name: WidgetSpec
    fields:
      - name: Replicas
        jsonTag: "replicas,omitempty"
        doc: ["replicas is the count."]
        markers: [optional]
"#,
        )
        .unwrap();

        let file = load_api_file(&path).unwrap();

        assert_eq!(file.path, path);
        assert_eq!(file.types[0].fields[0].serialized_name(), Some("replicas"));
    }

    #[test]
    fn load_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "types: [").unwrap();

        let err = load_api_file(&path).unwrap_err();
        assert!(matches!(err, KalError::SourceParseError { .. }));
    }
}
