//! mdframe Render
//!
//! This crate provides the render engine for mdframe, converting a parsed
//! [`Document`] into a tree of styled frames, text nodes and rectangles for
//! a host design tool.
//!
//! # Features
//!
//! - **Styled headings** - 6 levels, bold, sized by level
//! - **Inline spans** - Bold, italic, links and inline code as range styles
//! - **Code blocks** - Rounded, bordered frames with monospace text
//! - **Tables** - Fixed-width cells with a highlighted header row
//! - **Lists** - Bullet or numbered markers
//! - **Blockquotes** - Left-bordered italic text
//! - **Auto-layout** - Frames hug their content; the root is centred on the
//!   host viewport
//!
//! # Example
//!
//! ```
//! use mdframe_core::{Block, Document};
//! use mdframe_render::{MemoryHost, Renderer};
//!
//! let doc = Document::from_blocks(vec![Block::Heading {
//!     level: 1,
//!     text: "Hello World".to_string(),
//!     spans: Vec::new(),
//! }]);
//!
//! let mut host = MemoryHost::new();
//! let mut renderer = Renderer::new();
//! let root = renderer.render(&doc, &mut host).unwrap();
//! assert_eq!(root.as_frame().unwrap().name, "Hello World");
//! ```

pub mod code;
pub mod heading;
pub mod host;
pub mod layout;
pub mod list;
pub mod node;
pub mod table;
pub mod text;

pub use code::render_code_block;
pub use heading::render_heading;
pub use host::{estimate_text_size, FontError, Host, MemoryHost};
pub use layout::{center_on, layout};
pub use list::{list_marker, render_list, BULLET};
pub use node::{
    AutoLayout, FrameNode, LayoutMode, Point, RangeStyle, RectangleNode, Size, Sizing,
    StrokeWeights, TextAutoResize, TextNode, VisualNode, Walk,
};
pub use table::{cell_width, render_table};
pub use text::{
    render_blockquote, render_paragraph, span_font, Diagnostic, FontUse, RenderContext, TextBase,
};

use mdframe_config::{ComputedTheme, LayoutConfig};
use mdframe_core::{Block, Document, FontName, Paint, Result};

/// Render style configuration.
///
/// The paints, fonts and sizes every block renderer reads.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Root frame fill
    pub background: Paint,
    /// Strokes of quotes, rules, code blocks and tables
    pub border: Paint,
    /// Heading, code and table text
    pub formatted_text: Paint,
    /// Paragraph, quote and list text
    pub body_text: Paint,
    /// Code block and table fill
    pub code_background: Paint,
    /// Header row cell fill
    pub table_header_background: Paint,
    pub body_font: String,
    pub mono_font: String,
    pub heading_sizes: [f32; 6],
    pub paragraph_size: f32,
    pub layout: LayoutConfig,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_computed(&ComputedTheme::default())
    }
}

impl RenderStyle {
    /// Create from a computed theme (from config).
    pub fn from_computed(computed: &ComputedTheme) -> Self {
        Self {
            background: computed.background,
            border: computed.border,
            formatted_text: computed.formatted_text,
            body_text: computed.body_text,
            code_background: computed.code_background,
            table_header_background: computed.table_header_background,
            body_font: computed.body_font.clone(),
            mono_font: computed.mono_font.clone(),
            heading_sizes: computed.heading_sizes,
            paragraph_size: computed.paragraph_size,
            layout: computed.layout,
        }
    }

    /// Size for a heading level; out-of-range levels use the paragraph size.
    pub fn heading_size(&self, level: u8) -> f32 {
        match level {
            1..=6 => self.heading_sizes[usize::from(level) - 1],
            _ => self.paragraph_size,
        }
    }

    /// The body family in the given style.
    pub fn body_font(&self, style: &str) -> FontName {
        FontName::new(self.body_font.as_str(), style)
    }

    /// The regular monospace font.
    pub fn mono_font(&self) -> FontName {
        FontName::new(self.mono_font.as_str(), "Regular")
    }

    /// Base style of paragraph, quote and list text.
    pub fn body_base(&self, style: &str) -> TextBase {
        TextBase::new(self.body_font(style), self.paragraph_size, self.body_text)
    }
}

/// Render engine.
///
/// Each call to [`Renderer::render`] builds a fresh tree; fonts the host
/// could not load during the last render are kept in
/// [`Renderer::diagnostics`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    /// Render style
    style: RenderStyle,
    /// Fonts skipped during the last render
    diagnostics: Vec<Diagnostic>,
}

impl Renderer {
    /// Create a new renderer with default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom style.
    pub fn with_style(style: RenderStyle) -> Self {
        Self {
            style,
            diagnostics: Vec::new(),
        }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Set the render style.
    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    /// Fonts the host could not provide during the last render.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Render a document into a root frame centred on the host viewport.
    ///
    /// Unavailable fonts never fail the render. A host failure does, and
    /// the partially built tree is dropped.
    pub fn render<H: Host + ?Sized>(&mut self, doc: &Document, host: &mut H) -> Result<VisualNode> {
        self.diagnostics.clear();

        let style = &self.style;
        let mut ctx = RenderContext::new(style, host, &mut self.diagnostics);

        let mut root = FrameNode::new(
            doc.title.as_str(),
            AutoLayout::vertical(style.layout.root_spacing, style.layout.root_padding),
        )
        .with_fill(style.background);

        for block in &doc.blocks {
            root.push(render_block(&mut ctx, block)?);
        }

        let mut root = VisualNode::from(root);
        layout(&mut root);
        center_on(&mut root, host.viewport_center());
        Ok(root)
    }
}

/// Render a document with the default style.
pub fn render<H: Host + ?Sized>(doc: &Document, host: &mut H) -> Result<VisualNode> {
    Renderer::new().render(doc, host)
}

/// Render one block.
pub fn render_block<H: Host + ?Sized>(
    ctx: &mut RenderContext<'_, H>,
    block: &Block,
) -> Result<VisualNode> {
    match block {
        Block::Heading { level, text, spans } => render_heading(ctx, *level, text, spans),
        Block::Paragraph { text, spans } => render_paragraph(ctx, text, spans),
        Block::Blockquote { text, spans } => render_blockquote(ctx, text, spans),
        Block::CodeBlock { text } => render_code_block(ctx, text),
        Block::ThematicBreak => Ok(render_rule(ctx.style())),
        Block::List { ordered, items } => render_list(ctx, *ordered, items),
        Block::Table { rows } => render_table(ctx, rows),
    }
}

/// A horizontal rule: an unfilled, stroked rectangle one unit high.
pub fn render_rule(style: &RenderStyle) -> VisualNode {
    RectangleNode {
        fills: Vec::new(),
        strokes: vec![style.border],
        size: Size::new(style.layout.rule_width, 1.0),
        position: Point::default(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdframe_core::{Span, StyleAttrs, DEFAULT_TITLE};

    fn paragraph(text: &str, spans: Vec<Span>) -> Block {
        Block::Paragraph {
            text: text.to_string(),
            spans,
        }
    }

    #[test]
    fn test_root_frame() {
        let doc = Document::from_blocks(vec![paragraph("hi", Vec::new())]);
        let root = render(&doc, &mut MemoryHost::new()).unwrap();

        let frame = root.as_frame().unwrap();
        assert_eq!(frame.name, DEFAULT_TITLE);
        assert_eq!(frame.layout, AutoLayout::vertical(8.0, 24.0));
        assert_eq!(frame.fills, vec![RenderStyle::default().background]);
        assert_eq!(frame.children.len(), 1);
    }

    #[test]
    fn test_root_centred_on_viewport() {
        let doc = Document::from_blocks(vec![Block::ThematicBreak]);
        let mut host = MemoryHost::new().with_viewport(Point::new(1000.0, 500.0));
        let root = render(&doc, &mut host).unwrap();

        let size = root.size();
        assert_eq!(size, Size::new(648.0, 49.0));
        let position = root.position();
        assert_eq!(position.x + size.width / 2.0, 1000.0);
        assert_eq!(position.y + size.height / 2.0, 500.0);
    }

    #[test]
    fn test_rule_shape() {
        let rule = render_rule(&RenderStyle::default());
        match rule {
            VisualNode::Rectangle(rect) => {
                assert_eq!(rect.size, Size::new(600.0, 1.0));
                assert!(rect.fills.is_empty());
                assert_eq!(rect.strokes.len(), 1);
            }
            other => panic!("expected a rectangle, got {}", other.kind()),
        }
    }

    #[test]
    fn test_empty_document() {
        let root = render(&Document::from_blocks(Vec::new()), &mut MemoryHost::new()).unwrap();
        assert!(root.children().is_empty());
        assert_eq!(root.size(), Size::new(48.0, 48.0));
    }

    #[test]
    fn test_unsupported_font_never_fails_render() {
        let doc = Document::from_blocks(vec![paragraph(
            "heavy text",
            vec![Span::new(0, 5, StyleAttrs::font_style("Ultra Black"))],
        )]);
        let mut renderer = Renderer::new();
        let root = renderer
            .render(&doc, &mut MemoryHost::with_fonts(Vec::<FontName>::new()))
            .unwrap();

        assert_eq!(root.texts().count(), 1);
        assert!(!renderer.diagnostics().is_empty());
        assert!(renderer
            .diagnostics()
            .iter()
            .any(|d| d.font == FontName::new("Roboto", "Ultra Black")));
    }

    #[test]
    fn test_diagnostics_reset_between_renders() {
        let doc = Document::from_blocks(vec![paragraph("x", Vec::new())]);
        let mut renderer = Renderer::new();
        renderer.render(&doc, &mut MemoryHost::with_fonts(Vec::<FontName>::new())).unwrap();
        assert!(!renderer.diagnostics().is_empty());

        renderer.render(&doc, &mut MemoryHost::new()).unwrap();
        assert!(renderer.diagnostics().is_empty());
    }

    #[test]
    fn test_host_failure_aborts() {
        let doc = Document::from_blocks(vec![paragraph("x", Vec::new())]);
        let mut host = MemoryHost::new();
        host.set_offline(true);
        let err = render(&doc, &mut host).unwrap_err();
        assert!(matches!(err, mdframe_core::MdframeError::Host(_)));
    }

    #[test]
    fn test_custom_style() {
        let mut style = RenderStyle::default();
        style.layout.rule_width = 320.0;
        let mut renderer = Renderer::with_style(style);

        let doc = Document::from_blocks(vec![Block::ThematicBreak]);
        let root = renderer.render(&doc, &mut MemoryHost::new()).unwrap();
        assert_eq!(root.children()[0].size().width, 320.0);

        let mut wider = renderer.style().clone();
        wider.layout.rule_width = 480.0;
        renderer.set_style(wider);
        let root = renderer.render(&doc, &mut MemoryHost::new()).unwrap();
        assert_eq!(root.children()[0].size().width, 480.0);
    }
}
