use super::common::{lenient_field, RichTextRun};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Fields every block carries regardless of its kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockCommon {
    pub id: String,
    /// Reported by Notion but never followed: children are not fetched.
    pub has_children: bool,
}

/// Text payload shared by every text-bearing block kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextRun>,
}

/// To-do payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToDoContent {
    pub rich_text: Vec<RichTextRun>,
    pub checked: bool,
}

/// Code payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeContent {
    pub rich_text: Vec<RichTextRun>,
    pub language: String,
}

/// The closed set of block kinds this crate renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph(TextBlockContent),
    #[serde(rename = "heading_1")]
    Heading1(TextBlockContent),
    #[serde(rename = "heading_2")]
    Heading2(TextBlockContent),
    #[serde(rename = "heading_3")]
    Heading3(TextBlockContent),
    BulletedListItem(TextBlockContent),
    NumberedListItem(TextBlockContent),
    ToDo(ToDoContent),
    Toggle(TextBlockContent),
    Code(CodeContent),
    Quote(TextBlockContent),
    Divider,
    /// Any kind outside the set above, remembered by its tag.
    Unsupported { kind: String },
}

/// One unit of page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub kind: BlockKind,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            common: BlockCommon::default(),
            kind,
        }
    }

    pub fn id(&self) -> &str {
        &self.common.id
    }

    /// Get block type name as Notion spells it.
    pub fn block_type(&self) -> &str {
        match &self.kind {
            BlockKind::Paragraph(_) => "paragraph",
            BlockKind::Heading1(_) => "heading_1",
            BlockKind::Heading2(_) => "heading_2",
            BlockKind::Heading3(_) => "heading_3",
            BlockKind::BulletedListItem(_) => "bulleted_list_item",
            BlockKind::NumberedListItem(_) => "numbered_list_item",
            BlockKind::ToDo(_) => "to_do",
            BlockKind::Toggle(_) => "toggle",
            BlockKind::Code(_) => "code",
            BlockKind::Quote(_) => "quote",
            BlockKind::Divider => "divider",
            BlockKind::Unsupported { kind } => kind.as_str(),
        }
    }
}

/// Tag used when a block arrives without a `type` field.
const MISSING_BLOCK_TYPE: &str = "unknown";

impl From<Value> for Block {
    fn from(raw: Value) -> Self {
        let common = BlockCommon::deserialize(&raw).unwrap_or_default();
        let kind = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(MISSING_BLOCK_TYPE);

        let kind = match kind {
            "paragraph" => BlockKind::Paragraph(lenient_field(&raw, kind)),
            "heading_1" => BlockKind::Heading1(lenient_field(&raw, kind)),
            "heading_2" => BlockKind::Heading2(lenient_field(&raw, kind)),
            "heading_3" => BlockKind::Heading3(lenient_field(&raw, kind)),
            "bulleted_list_item" => BlockKind::BulletedListItem(lenient_field(&raw, kind)),
            "numbered_list_item" => BlockKind::NumberedListItem(lenient_field(&raw, kind)),
            "to_do" => BlockKind::ToDo(lenient_field(&raw, kind)),
            "toggle" => BlockKind::Toggle(lenient_field(&raw, kind)),
            "code" => BlockKind::Code(lenient_field(&raw, kind)),
            "quote" => BlockKind::Quote(lenient_field(&raw, kind)),
            "divider" => BlockKind::Divider,
            other => BlockKind::Unsupported {
                kind: other.to_string(),
            },
        };

        Block { common, kind }
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Block::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_to_do_with_checked_flag() {
        let block = Block::from(json!({
            "object": "block",
            "id": "b1",
            "has_children": false,
            "type": "to_do",
            "to_do": {"checked": true, "rich_text": [{"plain_text": "Ship it"}]}
        }));

        assert_eq!(block.id(), "b1");
        assert_eq!(block.block_type(), "to_do");
        match block.kind {
            BlockKind::ToDo(content) => {
                assert!(content.checked);
                assert_eq!(content.rich_text, vec![RichTextRun::new("Ship it")]);
            }
            other => panic!("Expected to_do, got {:?}", other),
        }
    }

    #[test]
    fn unknown_kind_is_remembered() {
        let block = Block::from(json!({"id": "b2", "type": "child_database", "child_database": {}}));
        assert_eq!(
            block.kind,
            BlockKind::Unsupported {
                kind: "child_database".to_string()
            }
        );
    }

    #[test]
    fn missing_payload_becomes_empty_text() {
        let block = Block::from(json!({"id": "b3", "type": "paragraph"}));
        assert_eq!(block.kind, BlockKind::Paragraph(TextBlockContent::default()));
    }

    #[test]
    fn missing_type_is_unknown() {
        let block = Block::from(json!({"id": "b4"}));
        assert_eq!(block.block_type(), "unknown");
    }
}
