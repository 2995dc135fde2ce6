//! The parsed document model.
//!
//! A [`Document`] is built once by the parser and handed read-only to the
//! render engine. It is plain data: no cycles, no handles, and it
//! round-trips through serde.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Title used when a document has no level-1 heading.
pub const DEFAULT_TITLE: &str = "Markdown";

/// A parsed Markdown document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Build a document, deriving the title from the first level-1 heading.
    ///
    /// ```
    /// use mdframe_core::{Block, Document, DEFAULT_TITLE};
    /// let doc = Document::from_blocks(vec![Block::ThematicBreak]);
    /// assert_eq!(doc.title, DEFAULT_TITLE);
    /// ```
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let title = blocks
            .iter()
            .find_map(|block| match block {
                Block::Heading { level: 1, text, .. } => Some(text.clone()),
                _ => None,
            })
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        Self { title, blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A list entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
    pub spans: Vec<Span>,
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub spans: Vec<Span>,
}

/// A table row. Rows of one table may differ in length.
pub type Row = Vec<Cell>;

/// A top-level structural unit of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        level: u8,
        text: String,
        spans: Vec<Span>,
    },
    Paragraph {
        text: String,
        spans: Vec<Span>,
    },
    /// One `>` line. Consecutive quote lines are separate blocks.
    Blockquote {
        text: String,
        spans: Vec<Span>,
    },
    /// Raw fenced code, internal newlines preserved, never inline-parsed.
    CodeBlock {
        text: String,
    },
    ThematicBreak,
    List {
        ordered: bool,
        items: Vec<ListItem>,
    },
    Table {
        rows: Vec<Row>,
    },
}

impl Block {
    /// Short lowercase name of the block kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::Blockquote { .. } => "blockquote",
            Block::CodeBlock { .. } => "code_block",
            Block::ThematicBreak => "thematic_break",
            Block::List { .. } => "list",
            Block::Table { .. } => "table",
        }
    }

    /// Every `(text, spans)` pair carried by this block, in document order.
    ///
    /// Code blocks contribute their text with no spans; thematic breaks
    /// contribute nothing.
    pub fn texts(&self) -> Vec<(&str, &[Span])> {
        match self {
            Block::Heading { text, spans, .. }
            | Block::Paragraph { text, spans }
            | Block::Blockquote { text, spans } => vec![(text.as_str(), spans.as_slice())],
            Block::CodeBlock { text } => vec![(text.as_str(), &[] as &[Span])],
            Block::ThematicBreak => Vec::new(),
            Block::List { items, .. } => items
                .iter()
                .map(|item| (item.text.as_str(), item.spans.as_slice()))
                .collect(),
            Block::Table { rows } => rows
                .iter()
                .flatten()
                .map(|cell| (cell.text.as_str(), cell.spans.as_slice()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::StyleAttrs;

    fn heading(level: u8, text: &str) -> Block {
        Block::Heading {
            level,
            text: text.to_string(),
            spans: Vec::new(),
        }
    }

    #[test]
    fn test_title_is_first_h1() {
        let doc = Document::from_blocks(vec![
            heading(2, "Intro"),
            heading(1, "First"),
            heading(1, "Second"),
        ]);
        assert_eq!(doc.title, "First");
    }

    #[test]
    fn test_title_default() {
        let doc = Document::from_blocks(vec![heading(2, "Only h2")]);
        assert_eq!(doc.title, "Markdown");
        assert!(Document::from_blocks(Vec::new()).is_empty());
    }

    #[test]
    fn test_texts_flattens_tables() {
        let table = Block::Table {
            rows: vec![
                vec![
                    Cell {
                        text: "a".into(),
                        spans: Vec::new(),
                    },
                    Cell {
                        text: "b".into(),
                        spans: Vec::new(),
                    },
                ],
                vec![Cell {
                    text: "c".into(),
                    spans: Vec::new(),
                }],
            ],
        };
        let texts: Vec<&str> = table.texts().into_iter().map(|(t, _)| t).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert!(Block::ThematicBreak.texts().is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let doc = Document::from_blocks(vec![
            heading(1, "Title"),
            Block::Paragraph {
                text: "Hello world.".into(),
                spans: vec![Span::new(6, 11, StyleAttrs::font_style("Bold"))],
            },
            Block::ThematicBreak,
            Block::List {
                ordered: true,
                items: vec![ListItem {
                    text: "a".into(),
                    spans: Vec::new(),
                }],
            },
        ]);

        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains(r#""type":"thematic_break""#));
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
