//! Visual node tree.
//!
//! The render engine produces an owned tree of frames, text nodes and
//! rectangles. Positions are relative to the parent frame, except for the
//! root whose position is absolute on the host canvas.

use std::fmt::Write;

use mdframe_core::{FontName, Paint};
use serde::{Deserialize, Serialize};

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Main axis of an auto-layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Vertical,
    Horizontal,
}

/// Auto-layout settings. Padding is the same on all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoLayout {
    pub mode: LayoutMode,
    pub spacing: f32,
    pub padding: f32,
}

impl AutoLayout {
    pub const fn vertical(spacing: f32, padding: f32) -> Self {
        Self {
            mode: LayoutMode::Vertical,
            spacing,
            padding,
        }
    }

    pub const fn horizontal(spacing: f32, padding: f32) -> Self {
        Self {
            mode: LayoutMode::Horizontal,
            spacing,
            padding,
        }
    }
}

/// How a frame's width is determined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sizing {
    /// Shrink to fit the children on both axes.
    Hug,
    /// Fixed width, height hugs the children.
    FixedWidth(f32),
}

/// Per-edge stroke weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeWeights {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl StrokeWeights {
    pub const fn uniform(weight: f32) -> Self {
        Self {
            top: weight,
            right: weight,
            bottom: weight,
            left: weight,
        }
    }

    /// Only the left edge is stroked.
    pub const fn left_only(weight: f32) -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: weight,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }
}

impl Default for StrokeWeights {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// An auto-layout container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameNode {
    pub name: String,
    pub layout: AutoLayout,
    pub sizing: Sizing,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub stroke_weights: StrokeWeights,
    pub corner_radius: f32,
    pub size: Size,
    pub position: Point,
    pub children: Vec<VisualNode>,
}

impl FrameNode {
    /// An unfilled, unstroked hugging frame.
    pub fn new(name: impl Into<String>, layout: AutoLayout) -> Self {
        Self {
            name: name.into(),
            layout,
            sizing: Sizing::Hug,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weights: StrokeWeights::default(),
            corner_radius: 0.0,
            size: Size::default(),
            position: Point::default(),
            children: Vec::new(),
        }
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_stroke(mut self, paint: Paint) -> Self {
        self.strokes.push(paint);
        self
    }

    pub fn push(&mut self, child: impl Into<VisualNode>) {
        self.children.push(child.into());
    }
}

/// How a text node is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAutoResize {
    None,
    Height,
    WidthAndHeight,
}

/// Style overrides applied to a `[start, end)` char range of a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeStyle {
    pub start: usize,
    pub end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
}

impl RangeStyle {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            font: None,
            font_size: None,
            fill: None,
            hyperlink: None,
        }
    }

    /// Whether no override is set.
    pub fn is_unstyled(&self) -> bool {
        self.font.is_none()
            && self.font_size.is_none()
            && self.fill.is_none()
            && self.hyperlink.is_none()
    }
}

/// A text node with a base style and per-range overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub characters: String,
    pub font: FontName,
    pub font_size: f32,
    pub fills: Vec<Paint>,
    pub auto_resize: TextAutoResize,
    pub ranges: Vec<RangeStyle>,
    pub size: Size,
    pub position: Point,
}

/// A plain rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleNode {
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub size: Size,
    pub position: Point,
}

/// A node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VisualNode {
    Frame(FrameNode),
    Text(TextNode),
    Rectangle(RectangleNode),
}

impl From<FrameNode> for VisualNode {
    fn from(node: FrameNode) -> Self {
        VisualNode::Frame(node)
    }
}

impl From<TextNode> for VisualNode {
    fn from(node: TextNode) -> Self {
        VisualNode::Text(node)
    }
}

impl From<RectangleNode> for VisualNode {
    fn from(node: RectangleNode) -> Self {
        VisualNode::Rectangle(node)
    }
}

impl VisualNode {
    pub fn kind(&self) -> &'static str {
        match self {
            VisualNode::Frame(_) => "frame",
            VisualNode::Text(_) => "text",
            VisualNode::Rectangle(_) => "rectangle",
        }
    }

    pub fn size(&self) -> Size {
        match self {
            VisualNode::Frame(n) => n.size,
            VisualNode::Text(n) => n.size,
            VisualNode::Rectangle(n) => n.size,
        }
    }

    pub fn position(&self) -> Point {
        match self {
            VisualNode::Frame(n) => n.position,
            VisualNode::Text(n) => n.position,
            VisualNode::Rectangle(n) => n.position,
        }
    }

    pub fn set_position(&mut self, position: Point) {
        match self {
            VisualNode::Frame(n) => n.position = position,
            VisualNode::Text(n) => n.position = position,
            VisualNode::Rectangle(n) => n.position = position,
        }
    }

    /// Children of a frame; empty for leaves.
    pub fn children(&self) -> &[VisualNode] {
        match self {
            VisualNode::Frame(n) => &n.children,
            _ => &[],
        }
    }

    pub fn as_frame(&self) -> Option<&FrameNode> {
        match self {
            VisualNode::Frame(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            VisualNode::Text(n) => Some(n),
            _ => None,
        }
    }

    /// Depth-first pre-order iterator over this node and its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Every text node in document order.
    pub fn texts(&self) -> impl Iterator<Item = &TextNode> {
        self.walk().filter_map(VisualNode::as_text)
    }

    /// Indented one-line-per-node description of the tree, without sizes.
    ///
    /// ```
    /// use mdframe_render::{AutoLayout, FrameNode, VisualNode};
    /// let frame = FrameNode::new("Doc", AutoLayout::vertical(8.0, 24.0));
    /// assert_eq!(
    ///     VisualNode::from(frame).outline(),
    ///     "frame \"Doc\" vertical spacing=8 padding=24\n"
    /// );
    /// ```
    pub fn outline(&self) -> String {
        let mut out = String::new();
        // Writing into a String never fails.
        let _ = write_outline(self, 0, &mut out);
        out
    }
}

/// Iterator returned by [`VisualNode::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a VisualNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a VisualNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

fn write_outline(node: &VisualNode, depth: usize, out: &mut String) -> std::fmt::Result {
    let indent = "  ".repeat(depth);
    match node {
        VisualNode::Frame(frame) => {
            let mode = match frame.layout.mode {
                LayoutMode::Vertical => "vertical",
                LayoutMode::Horizontal => "horizontal",
            };
            write!(
                out,
                "{}frame {:?} {} spacing={} padding={}",
                indent, frame.name, mode, frame.layout.spacing, frame.layout.padding
            )?;
            if let Sizing::FixedWidth(width) = frame.sizing {
                write!(out, " width={}", width)?;
            }
            if !frame.fills.is_empty() {
                write!(out, " fills={}", frame.fills.len())?;
            }
            if !frame.strokes.is_empty() {
                if frame.stroke_weights.is_uniform() {
                    write!(out, " stroke")?;
                } else {
                    write!(out, " stroke=left")?;
                }
            }
            if frame.corner_radius > 0.0 {
                write!(out, " radius={}", frame.corner_radius)?;
            }
            writeln!(out)?;
        }
        VisualNode::Text(text) => {
            writeln!(
                out,
                "{}text {:?} {} {}",
                indent, text.characters, text.font, text.font_size
            )?;
            for range in &text.ranges {
                write!(out, "{}  range {}..{}", indent, range.start, range.end)?;
                if let Some(font) = &range.font {
                    write!(out, " font={:?}", font.to_string())?;
                }
                if let Some(size) = range.font_size {
                    write!(out, " size={}", size)?;
                }
                if let Some(fill) = &range.fill {
                    write!(out, " fill={}", fill.color.to_hex())?;
                }
                if let Some(url) = &range.hyperlink {
                    write!(out, " link={}", url)?;
                }
                writeln!(out)?;
            }
        }
        VisualNode::Rectangle(rect) => writeln!(
            out,
            "{}rectangle {}x{}",
            indent, rect.size.width, rect.size.height
        )?,
    }

    for child in node.children() {
        write_outline(child, depth + 1, out)?;
    }
    Ok(())
}
