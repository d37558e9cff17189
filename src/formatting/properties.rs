//! Property normalization: reduces typed Notion properties to plain values.
//!
//! Normalization never fails. A property whose payload is missing degrades to
//! an empty string, `null`, or an empty list so that one odd property cannot
//! spoil a whole page or search response.

use crate::model::{join_plain_text, PropertyValue};
use indexmap::IndexMap;
use serde::Serialize;

/// A property reduced to something a client can read without knowing Notion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedProperty {
    Text(String),
    Number(serde_json::Number),
    Boolean(bool),
    List(Vec<String>),
    Null,
    /// An unrecognized property, passed through as Notion sent it.
    Raw(serde_json::Value),
}

impl NormalizedProperty {
    fn text_or_null(value: Option<&str>) -> Self {
        match value {
            Some(text) => NormalizedProperty::Text(text.to_string()),
            None => NormalizedProperty::Null,
        }
    }
}

/// Normalizes every property; the output has exactly the input's keys, in order.
pub fn normalize_properties(
    properties: &IndexMap<String, PropertyValue>,
) -> IndexMap<String, NormalizedProperty> {
    properties
        .iter()
        .map(|(name, value)| (name.clone(), normalize_property(value)))
        .collect()
}

/// Normalizes a single property by its kind.
pub fn normalize_property(value: &PropertyValue) -> NormalizedProperty {
    match value {
        PropertyValue::Title(runs) | PropertyValue::RichText(runs) => {
            NormalizedProperty::Text(join_plain_text(runs))
        }
        PropertyValue::Number(number) => number
            .clone()
            .map_or(NormalizedProperty::Null, NormalizedProperty::Number),
        PropertyValue::Select(option) => NormalizedProperty::text_or_null(
            option
                .as_ref()
                .and_then(|opt| opt.name.as_deref())
                .filter(|name| !name.is_empty()),
        ),
        PropertyValue::MultiSelect(options) => NormalizedProperty::List(
            options
                .iter()
                .map(|opt| opt.name.clone().unwrap_or_default())
                .collect(),
        ),
        PropertyValue::Date(date) => NormalizedProperty::text_or_null(
            date.as_ref()
                .and_then(|d| d.start.as_deref())
                .filter(|start| !start.is_empty()),
        ),
        PropertyValue::Checkbox(checked) => NormalizedProperty::Boolean(*checked),
        PropertyValue::Url(text) | PropertyValue::Email(text) | PropertyValue::PhoneNumber(text) => {
            NormalizedProperty::text_or_null(text.as_deref())
        }
        PropertyValue::People(people) => {
            NormalizedProperty::List(people.iter().map(|person| person.label()).collect())
        }
        PropertyValue::Relation(relations) => NormalizedProperty::List(
            relations
                .iter()
                .map(|relation| relation.id.clone().unwrap_or_default())
                .collect(),
        ),
        PropertyValue::Other(raw) => {
            log::debug!(
                "Passing through unrecognized property type '{}'",
                value.type_name()
            );
            NormalizedProperty::Raw(raw.clone())
        }
    }
}
