use super::common::{lenient_field, DateValue, Person, RelationRef, RichTextRun, SelectOption};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A page property as Notion reports it, keyed by its own `type` tag.
///
/// Known kinds carry their typed payload. Anything else is kept verbatim in
/// [`PropertyValue::Other`] so new Notion property kinds flow through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Title(Vec<RichTextRun>),
    RichText(Vec<RichTextRun>),
    Number(Option<serde_json::Number>),
    Select(Option<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Date(Option<DateValue>),
    Checkbox(bool),
    Url(Option<String>),
    Email(Option<String>),
    PhoneNumber(Option<String>),
    People(Vec<Person>),
    Relation(Vec<RelationRef>),
    Other(Value),
}

impl PropertyValue {
    /// Returns the Notion API type name for this property value.
    pub fn type_name(&self) -> &str {
        match self {
            PropertyValue::Title(_) => "title",
            PropertyValue::RichText(_) => "rich_text",
            PropertyValue::Number(_) => "number",
            PropertyValue::Select(_) => "select",
            PropertyValue::MultiSelect(_) => "multi_select",
            PropertyValue::Date(_) => "date",
            PropertyValue::Checkbox(_) => "checkbox",
            PropertyValue::Url(_) => "url",
            PropertyValue::Email(_) => "email",
            PropertyValue::PhoneNumber(_) => "phone_number",
            PropertyValue::People(_) => "people",
            PropertyValue::Relation(_) => "relation",
            PropertyValue::Other(raw) => raw.get("type").and_then(Value::as_str).unwrap_or(""),
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(raw: Value) -> Self {
        let kind = raw.get("type").and_then(Value::as_str).unwrap_or_default();
        match kind {
            "title" => PropertyValue::Title(lenient_field(&raw, "title")),
            "rich_text" => PropertyValue::RichText(lenient_field(&raw, "rich_text")),
            "number" => PropertyValue::Number(lenient_field(&raw, "number")),
            "select" => PropertyValue::Select(lenient_field(&raw, "select")),
            "multi_select" => PropertyValue::MultiSelect(lenient_field(&raw, "multi_select")),
            "date" => PropertyValue::Date(lenient_field(&raw, "date")),
            "checkbox" => PropertyValue::Checkbox(lenient_field(&raw, "checkbox")),
            "url" => PropertyValue::Url(lenient_field(&raw, "url")),
            "email" => PropertyValue::Email(lenient_field(&raw, "email")),
            "phone_number" => PropertyValue::PhoneNumber(lenient_field(&raw, "phone_number")),
            "people" => PropertyValue::People(lenient_field(&raw, "people")),
            "relation" => PropertyValue::Relation(lenient_field(&raw, "relation")),
            _ => PropertyValue::Other(raw),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(PropertyValue::from)
    }
}
