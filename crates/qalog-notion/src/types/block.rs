//! Notion block types.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One content unit appended to a page.
///
/// Serializes to the Notion block object format, each text block carrying a
/// single plain-text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Level 3 heading.
    Heading(String),
    /// Bulleted list item.
    BulletedItem(String),
    /// Plain paragraph.
    Paragraph(String),
    /// Horizontal separator.
    Divider,
}

impl Block {
    /// Notion block type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Heading(_) => "heading_3",
            Self::BulletedItem(_) => "bulleted_list_item",
            Self::Paragraph(_) => "paragraph",
            Self::Divider => "divider",
        }
    }

    /// Text content, `None` for a divider.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Heading(text) | Self::BulletedItem(text) | Self::Paragraph(text) => Some(text),
            Self::Divider => None,
        }
    }
}

#[derive(Serialize)]
struct RichTextBody<'a> {
    rich_text: [RichText<'a>; 1],
}

#[derive(Serialize)]
struct RichText<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextContent<'a>,
}

#[derive(Serialize)]
struct TextContent<'a> {
    content: &'a str,
}

impl<'a> RichTextBody<'a> {
    fn plain(content: &'a str) -> Self {
        Self {
            rich_text: [RichText {
                kind: "text",
                text: TextContent { content },
            }],
        }
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.type_name();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", kind)?;
        match self.text() {
            Some(content) => map.serialize_entry(kind, &RichTextBody::plain(content))?,
            None => map.serialize_entry(kind, &serde_json::Map::new())?,
        }
        map.end()
    }
}

/// Body of `PATCH /blocks/{id}/children`.
#[derive(Serialize)]
pub(crate) struct AppendChildrenRequest<'a> {
    pub(crate) children: &'a [Block],
}
