//! Small payload records shared by properties and blocks.
//!
//! Every field defaults when the upstream omits it, so a record never fails
//! to deserialize just because Notion left something out.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reads `raw[key]` as `T`, degrading to `T::default()` when the field is
/// missing, null, or the wrong shape.
pub(crate) fn lenient_field<T: DeserializeOwned + Default>(raw: &Value, key: &str) -> T {
    raw.get(key)
        .and_then(|value| T::deserialize(value).ok())
        .unwrap_or_default()
}

/// One span of rich text. Only the plain-text projection is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RichTextRun {
    pub plain_text: String,
}

impl RichTextRun {
    pub fn new(plain_text: impl Into<String>) -> Self {
        Self {
            plain_text: plain_text.into(),
        }
    }
}

/// Concatenates the plain text of every run, in order, with no separator.
pub fn join_plain_text(runs: &[RichTextRun]) -> String {
    runs.iter().map(|run| run.plain_text.as_str()).collect()
}

/// A labeled option of a select or multi-select property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOption {
    pub id: Option<String>,
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Date property payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateValue {
    pub start: Option<String>,
    pub end: Option<String>,
    pub time_zone: Option<String>,
}

/// A workspace member referenced by a people property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Person {
    /// The display label: the name, falling back to the id.
    pub fn label(&self) -> String {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.id.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// A link to another page through a relation property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationRef {
    pub id: Option<String>,
}
