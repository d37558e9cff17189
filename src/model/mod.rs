//! Typed view of the Notion document model this crate consumes.

mod block;
pub mod common;
mod property_value;

pub use block::{Block, BlockCommon, BlockKind, CodeContent, TextBlockContent, ToDoContent};
pub use common::*;
pub use property_value::PropertyValue;

use indexmap::IndexMap;
use serde::Deserialize;

/// A Notion page: metadata plus its raw property map.
///
/// Timestamps are kept exactly as the API spelled them.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Page {
    pub object: String,
    pub id: String,
    pub url: String,
    pub created_time: String,
    pub last_edited_time: String,
    pub properties: IndexMap<String, PropertyValue>,
}

/// The subset of page metadata carried into a content bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub object: String,
    pub id: String,
    pub url: String,
    pub created_time: String,
    pub last_edited_time: String,
}

impl Page {
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            object: self.object.clone(),
            id: self.id.clone(),
            url: self.url.clone(),
            created_time: self.created_time.clone(),
            last_edited_time: self.last_edited_time.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_keeps_property_order() {
        let page: Page = serde_json::from_value(json!({
            "object": "page",
            "id": "p1",
            "url": "https://www.notion.so/p1",
            "created_time": "2024-01-01T00:00:00.000Z",
            "last_edited_time": "2024-01-02T00:00:00.000Z",
            "archived": false,
            "properties": {
                "Zeta": {"type": "checkbox", "checkbox": true},
                "Alpha": {"type": "number", "number": 1}
            }
        }))
        .expect("page should parse");

        let keys: Vec<&str> = page.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha"]);
        assert_eq!(page.meta().created_time, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn page_without_properties_parses() {
        let page: Page = serde_json::from_value(json!({"object": "page", "id": "p2"}))
            .expect("page should parse");
        assert!(page.properties.is_empty());
        assert_eq!(page.url, "");
    }
}
