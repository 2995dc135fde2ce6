//! mdframe Parser
//!
//! A line-oriented Markdown parser that produces the block/inline
//! [`Document`] model consumed by the mdframe render engine.
//!
//! # Overview
//!
//! The input is split into lines and walked once, front to back. Each
//! non-blank line is classified by the first rule that matches, in this
//! order: thematic break, heading, blockquote, code fence, table, list,
//! paragraph. Parsing never fails: anything unrecognised becomes a
//! paragraph, and malformed inline markers stay literal text.
//!
//! # Example
//!
//! ```
//! use mdframe_core::Block;
//! use mdframe_parser::parse;
//!
//! let doc = parse("# Title\n\nHello **world**.");
//! assert_eq!(doc.title, "Title");
//! assert!(matches!(&doc.blocks[1], Block::Paragraph { text, .. } if text == "Hello world."));
//! ```

pub mod inline;

pub use inline::{resolve_inline, InlineParser, InlineText};

use mdframe_core::{Block, Cell, Document, InlineTheme, ListItem, Row};
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// Regex for thematic breaks: three or more hyphens and nothing else
static HR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-{3,}\s*$").unwrap());

/// Regex for ATX headings
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

/// Regex for a blockquote marker, with its optional following space
static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s?").unwrap());

/// Regex for pipe table rows
static TABLE_ROW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|.*\|$").unwrap());

/// Regex for one cell of a table alignment row
static TABLE_SEP_CELL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^:?-{3,}:?$").unwrap());

/// Regex for list items: -, *, + or `N.`
static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([*+-]|[0-9]+\.)\s+(.+)$").unwrap());

/// Code fence prefix. Anything after it on the opening line is ignored.
const FENCE: &str = "```";

// =============================================================================
// Types
// =============================================================================

/// List bullet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListBullet {
    /// Dash bullet: -
    Dash,
    /// Asterisk bullet: *
    Asterisk,
    /// Plus bullet: +
    Plus,
    /// Ordered number
    Ordered(usize),
}

impl ListBullet {
    /// Parse a bullet string.
    ///
    /// ```
    /// use mdframe_parser::ListBullet;
    /// assert_eq!(ListBullet::parse("3."), Some(ListBullet::Ordered(3)));
    /// assert_eq!(ListBullet::parse("+"), Some(ListBullet::Plus));
    /// assert_eq!(ListBullet::parse("x"), None);
    /// assert_eq!(
    ///     ListBullet::parse("99999999999999999999."),
    ///     Some(ListBullet::Ordered(usize::MAX))
    /// );
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "-" => Some(ListBullet::Dash),
            "*" => Some(ListBullet::Asterisk),
            "+" => Some(ListBullet::Plus),
            s if s.ends_with('.') => {
                let digits = &s[..s.len() - 1];
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                // Numbers too large for usize saturate.
                Some(ListBullet::Ordered(digits.parse().unwrap_or(usize::MAX)))
            }
            _ => None,
        }
    }

    /// Check if this is an ordered bullet.
    pub fn is_ordered(&self) -> bool {
        matches!(self, ListBullet::Ordered(_))
    }
}

/// Markdown parser.
///
/// Holds the inline resolver used for heading, paragraph, quote, list and
/// table cell content. The parser itself is stateless between calls.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    inline_parser: InlineParser,
}

impl Parser {
    /// Create a parser with the default inline theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser whose link and code spans use `theme`.
    pub fn with_theme(theme: InlineTheme) -> Self {
        Self {
            inline_parser: InlineParser::with_theme(theme),
        }
    }

    pub fn inline_parser(&self) -> &InlineParser {
        &self.inline_parser
    }

    /// Parse a complete document.
    pub fn parse_document(&self, content: &str) -> Document {
        let normalized = normalize_newlines(content);
        let lines: Vec<&str> = normalized.split('\n').collect();

        let mut scanner = BlockScanner {
            lines: &lines,
            pos: 0,
            inline: &self.inline_parser,
            blocks: Vec::new(),
        };
        scanner.run();

        Document::from_blocks(scanner.blocks)
    }
}

/// Parse a document with the default inline theme.
pub fn parse(content: &str) -> Document {
    Parser::new().parse_document(content)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

// =============================================================================
// Block scanning
// =============================================================================

/// Single forward pass over the input lines.
///
/// Every `try_parse_*` either consumes at least one line and returns
/// `true`, or leaves `pos` untouched and returns `false`.
struct BlockScanner<'a> {
    lines: &'a [&'a str],
    pos: usize,
    inline: &'a InlineParser,
    blocks: Vec<Block>,
}

impl BlockScanner<'_> {
    fn run(&mut self) {
        while let Some(&line) = self.lines.get(self.pos) {
            if is_blank(line) {
                self.pos += 1;
                continue;
            }

            let handled = self.try_parse_hr(line)
                || self.try_parse_heading(line)
                || self.try_parse_blockquote(line)
                || self.try_parse_code_fence(line)
                || self.try_parse_table(line)
                || self.try_parse_list(line);

            if !handled {
                self.parse_paragraph();
            }
        }
    }

    fn try_parse_hr(&mut self, line: &str) -> bool {
        if !HR_RE.is_match(line) {
            return false;
        }
        self.blocks.push(Block::ThematicBreak);
        self.pos += 1;
        true
    }

    fn try_parse_heading(&mut self, line: &str) -> bool {
        let Some(caps) = HEADING_RE.captures(line) else {
            return false;
        };
        let level = caps.get(1).map_or(1, |m| m.as_str().len()) as u8;
        let content = caps.get(2).map_or("", |m| m.as_str());
        let resolved = self.inline.resolve(content);

        self.blocks.push(Block::Heading {
            level,
            text: resolved.text,
            spans: resolved.spans,
        });
        self.pos += 1;
        true
    }

    fn try_parse_blockquote(&mut self, line: &str) -> bool {
        let Some(marker) = BLOCKQUOTE_RE.find(line) else {
            return false;
        };
        let resolved = self.inline.resolve(&line[marker.end()..]);

        self.blocks.push(Block::Blockquote {
            text: resolved.text,
            spans: resolved.spans,
        });
        self.pos += 1;
        true
    }

    /// An unterminated fence swallows the rest of the input.
    fn try_parse_code_fence(&mut self, line: &str) -> bool {
        if !line.starts_with(FENCE) {
            return false;
        }
        self.pos += 1;

        let mut body = Vec::new();
        while let Some(&code_line) = self.lines.get(self.pos) {
            self.pos += 1;
            if code_line.starts_with(FENCE) {
                break;
            }
            body.push(code_line);
        }

        self.blocks.push(Block::CodeBlock {
            text: body.join("\n"),
        });
        true
    }

    fn try_parse_table(&mut self, line: &str) -> bool {
        if !TABLE_ROW_RE.is_match(line) {
            return false;
        }

        let mut rows: Vec<Row> = Vec::new();
        while let Some(&row_line) = self.lines.get(self.pos) {
            if !TABLE_ROW_RE.is_match(row_line) {
                break;
            }
            self.pos += 1;

            let cells = split_cells(row_line);
            if is_separator_row(&cells) {
                continue;
            }
            rows.push(
                cells
                    .into_iter()
                    .map(|cell| {
                        let resolved = self.inline.resolve(cell);
                        Cell {
                            text: resolved.text,
                            spans: resolved.spans,
                        }
                    })
                    .collect(),
            );
        }

        if !rows.is_empty() {
            self.blocks.push(Block::Table { rows });
        }
        true
    }

    fn try_parse_list(&mut self, line: &str) -> bool {
        if !LIST_ITEM_RE.is_match(line) {
            return false;
        }

        let mut ordered = false;
        let mut items = Vec::new();
        while let Some(&item_line) = self.lines.get(self.pos) {
            let Some(caps) = LIST_ITEM_RE.captures(item_line) else {
                break;
            };
            self.pos += 1;

            let bullet = caps
                .get(1)
                .and_then(|m| ListBullet::parse(m.as_str()))
                .unwrap_or(ListBullet::Dash);
            ordered |= bullet.is_ordered();

            let resolved = self.inline.resolve(caps.get(2).map_or("", |m| m.as_str()));
            items.push(ListItem {
                text: resolved.text,
                spans: resolved.spans,
            });
        }

        self.blocks.push(Block::List { ordered, items });
        true
    }

    /// Joins this and every following non-blank line with a space,
    /// whatever those lines look like.
    fn parse_paragraph(&mut self) {
        let mut buf = Vec::new();
        while let Some(&line) = self.lines.get(self.pos) {
            if is_blank(line) {
                break;
            }
            buf.push(line);
            self.pos += 1;
        }

        let resolved = self.inline.resolve(&buf.join(" "));
        self.blocks.push(Block::Paragraph {
            text: resolved.text,
            spans: resolved.spans,
        });
    }
}

/// Strip the outer pipes of a table row and split it into trimmed cells.
fn split_cells(line: &str) -> Vec<&str> {
    // TABLE_ROW_RE guarantees an ASCII pipe at both ends.
    line[1..line.len() - 1].split('|').map(str::trim).collect()
}

/// An alignment row like `| --- | :---: |`.
fn is_separator_row(cells: &[&str]) -> bool {
    cells.iter().all(|cell| TABLE_SEP_CELL_RE.is_match(cell))
}

// =============================================================================
// Tests
// =============================================================================
