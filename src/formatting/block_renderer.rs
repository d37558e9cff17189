//! Block rendering: linearizes Notion blocks into markdown-like text.
//!
//! Each block renders to exactly one entry. Unsupported kinds render as a
//! visible `[kind]` placeholder; only empty entries are dropped, and only
//! when the page's entries are joined.

use crate::constants::{BLOCK_SEPARATOR, CHARS_PER_BLOCK_ESTIMATE};
use crate::model::{join_plain_text, Block, BlockKind};

/// Renders a single block to its line of text.
pub fn render_block(block: &Block) -> String {
    match &block.kind {
        BlockKind::Paragraph(content) => join_plain_text(&content.rich_text),
        BlockKind::Heading1(content) => format!("# {}", join_plain_text(&content.rich_text)),
        BlockKind::Heading2(content) => format!("## {}", join_plain_text(&content.rich_text)),
        BlockKind::Heading3(content) => format!("### {}", join_plain_text(&content.rich_text)),
        BlockKind::BulletedListItem(content) => {
            format!("• {}", join_plain_text(&content.rich_text))
        }
        // Always "1.": entries are rendered independently, not counted.
        BlockKind::NumberedListItem(content) => {
            format!("1. {}", join_plain_text(&content.rich_text))
        }
        BlockKind::ToDo(todo) => {
            let mark = if todo.checked { "✓" } else { "○" };
            format!("{} {}", mark, join_plain_text(&todo.rich_text))
        }
        BlockKind::Toggle(content) => format!("▸ {}", join_plain_text(&content.rich_text)),
        BlockKind::Code(code) => format!(
            "```{}\n{}\n```",
            code.language,
            join_plain_text(&code.rich_text)
        ),
        BlockKind::Quote(content) => format!("> {}", join_plain_text(&content.rich_text)),
        BlockKind::Divider => "---".to_string(),
        BlockKind::Unsupported { kind } => format!("[{}]", kind),
    }
}

/// Renders every block, drops empty entries, and joins the rest with a blank line.
pub fn render_blocks(blocks: &[Block]) -> String {
    let rendered: Vec<String> = blocks.iter().map(render_block).collect();
    join_rendered(rendered)
}

fn join_rendered(rendered: Vec<String>) -> String {
    let mut output = String::with_capacity(rendered.len() * CHARS_PER_BLOCK_ESTIMATE);
    for entry in rendered.into_iter().filter(|entry| !entry.is_empty()) {
        if !output.is_empty() {
            output.push_str(BLOCK_SEPARATOR);
        }
        output.push_str(&entry);
    }
    output
}
