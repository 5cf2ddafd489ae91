//! Line-oriented markdown to block conversion.
//!
//! Only the two markers the reformatting prompt asks for are recognized.
//! Every other non-blank line becomes a paragraph as-is: no nested lists,
//! no inline formatting, no merging of consecutive lines.

use qalog_reformat::{HEADING_MARKER, LIST_MARKER};

use crate::types::Block;

/// Convert markdown into blocks, one block per non-blank line, in order.
pub fn markdown_to_blocks(markdown: &str) -> Vec<Block> {
    markdown.lines().filter_map(line_to_block).collect()
}

/// Classify a single line. Blank and whitespace-only lines yield `None`.
pub fn line_to_block(line: &str) -> Option<Block> {
    if let Some(text) = line.strip_prefix(HEADING_MARKER) {
        Some(Block::Heading(text.to_owned()))
    } else if let Some(text) = line.strip_prefix(LIST_MARKER) {
        Some(Block::BulletedItem(text.to_owned()))
    } else if line.trim().is_empty() {
        None
    } else {
        Some(Block::Paragraph(line.to_owned()))
    }
}
