//! Text node construction.
//!
//! Builds text nodes from plain text plus spans. Every font is loaded
//! through the [`Host`] before a node references it; fonts the host does
//! not have are recorded as [`Diagnostic`]s and simply not applied.

use std::fmt;

use mdframe_core::{char_len, FontName, MdframeError, Paint, Result, Span, StyleAttrs};

use crate::host::{FontError, Host};
use crate::node::{
    AutoLayout, FrameNode, Point, RangeStyle, StrokeWeights, TextAutoResize, TextNode, VisualNode,
};
use crate::RenderStyle;

/// Family used when neither a span nor its node names one.
const FALLBACK_FAMILY: &str = "Roboto";

/// Style used when neither a span nor its node names one.
const FALLBACK_STYLE: &str = "Regular";

/// Chars of node text kept in a diagnostic.
const PREVIEW_CHARS: usize = 24;

/// What a font was being loaded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontUse {
    /// The host's initial font of a new text node.
    Default,
    /// The node's base font.
    Base,
    /// A formatting span.
    Span { start: usize, end: usize },
    /// The monospace font of an inline code span.
    Code { start: usize, end: usize },
}

impl fmt::Display for FontUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontUse::Default => write!(f, "default font"),
            FontUse::Base => write!(f, "base font"),
            FontUse::Span { start, end } => write!(f, "span {}..{}", start, end),
            FontUse::Code { start, end } => write!(f, "code span {}..{}", start, end),
        }
    }
}

/// A font the host could not provide.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub font: FontName,
    pub usage: FontUse,
    /// Leading chars of the affected text node.
    pub preview: String,
}

impl Diagnostic {
    pub fn new(font: FontName, usage: FontUse, text: &str) -> Self {
        let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
        if char_len(text) > PREVIEW_CHARS {
            preview.push('…');
        }
        Self {
            font,
            usage,
            preview,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "font \"{}\" unavailable for {} of {:?}",
            self.font, self.usage, self.preview
        )
    }
}

/// Base style of a text node.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBase {
    pub font: FontName,
    pub font_size: f32,
    pub fill: Paint,
}

impl TextBase {
    pub fn new(font: FontName, font_size: f32, fill: Paint) -> Self {
        Self {
            font,
            font_size,
            fill,
        }
    }
}

/// Font a span asks for on a node whose base font is `base`.
///
/// Family: the span's, else the base family. Style: the span's, else the
/// bold/italic combination, else the base style.
///
/// ```
/// use mdframe_core::{FontName, StyleAttrs};
/// use mdframe_render::span_font;
///
/// let base = FontName::new("Roboto", "Medium");
/// let bold_italic = StyleAttrs { bold: Some(true), italic: Some(true), ..Default::default() };
/// assert_eq!(span_font(&bold_italic, &base), FontName::new("Roboto", "Bold Italic"));
/// assert_eq!(span_font(&StyleAttrs::default(), &base), base);
/// ```
pub fn span_font(attrs: &StyleAttrs, base: &FontName) -> FontName {
    let family = attrs
        .font_family
        .as_deref()
        .or_else(|| non_empty(&base.family))
        .unwrap_or(FALLBACK_FAMILY);

    let bold = attrs.bold.unwrap_or(false);
    let italic = attrs.italic.unwrap_or(false);
    let style = match (attrs.font_style.as_deref(), bold, italic) {
        (Some(style), _, _) => style,
        (None, true, true) => "Bold Italic",
        (None, true, false) => "Bold",
        (None, false, true) => "Italic",
        (None, false, false) => non_empty(&base.style).unwrap_or(FALLBACK_STYLE),
    };

    FontName::new(family, style)
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// Per-render state shared by the block renderers.
pub struct RenderContext<'a, H: Host + ?Sized> {
    style: &'a RenderStyle,
    host: &'a mut H,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl<'a, H: Host + ?Sized> RenderContext<'a, H> {
    pub fn new(
        style: &'a RenderStyle,
        host: &'a mut H,
        diagnostics: &'a mut Vec<Diagnostic>,
    ) -> Self {
        Self {
            style,
            host,
            diagnostics,
        }
    }

    pub fn style(&self) -> &'a RenderStyle {
        self.style
    }

    /// Load a font through the host.
    ///
    /// Returns `Ok(false)` and records a diagnostic when the font is
    /// unavailable; a host failure is an error.
    pub fn load_font(&mut self, font: &FontName, usage: FontUse, text: &str) -> Result<bool> {
        match self.host.load_font(font) {
            Ok(()) => Ok(true),
            Err(FontError::Unavailable(_)) => {
                self.diagnostics.push(Diagnostic::new(font.clone(), usage, text));
                Ok(false)
            }
            Err(FontError::Host(message)) => Err(MdframeError::Host(message)),
        }
    }

    /// Build a text node: load the host default font, then the base font,
    /// then apply `spans` in order.
    ///
    /// If the base font is unavailable the node keeps the host default font.
    pub fn text_node(&mut self, text: &str, spans: &[Span], base: &TextBase) -> Result<TextNode> {
        let default_font = self.host.default_font();
        self.load_font(&default_font, FontUse::Default, text)?;

        let font = if self.load_font(&base.font, FontUse::Base, text)? {
            base.font.clone()
        } else {
            default_font
        };

        let ranges = self.apply_spans(text, spans, &base.font)?;

        Ok(TextNode {
            characters: text.to_string(),
            font,
            font_size: base.font_size,
            fills: vec![base.fill],
            auto_resize: TextAutoResize::WidthAndHeight,
            ranges,
            size: self.host.measure_text(text, base.font_size),
            position: Point::default(),
        })
    }

    fn apply_spans(
        &mut self,
        text: &str,
        spans: &[Span],
        base_font: &FontName,
    ) -> Result<Vec<RangeStyle>> {
        let len = char_len(text);
        let mut ranges = Vec::with_capacity(spans.len());

        for span in spans {
            let Some((start, end)) = span.clamped(len) else {
                continue;
            };
            let attrs = &span.style;
            let mut range = RangeStyle::new(start, end);

            if attrs.touches_font() {
                let font = span_font(attrs, base_font);
                if self.load_font(&font, FontUse::Span { start, end }, text)? {
                    range.font = Some(font);
                }
                range.font_size = attrs.font_size;
            }

            if let Some(color) = attrs.fill_color {
                range.fill = Some(Paint::solid(color));
            }

            range.hyperlink.clone_from(&attrs.hyperlink);

            if attrs.is_code() {
                let family = attrs.font_family.as_deref().unwrap_or(&self.style.mono_font);
                let font = FontName::new(family, FALLBACK_STYLE);
                if self.load_font(&font, FontUse::Code { start, end }, text)? {
                    range.font = Some(font);
                }
            }

            if !range.is_unstyled() {
                ranges.push(range);
            }
        }

        Ok(ranges)
    }
}

/// A paragraph: body font, body text fill, sized to its content.
pub fn render_paragraph<H: Host + ?Sized>(
    ctx: &mut RenderContext<'_, H>,
    text: &str,
    spans: &[Span],
) -> Result<VisualNode> {
    let base = ctx.style().body_base(FALLBACK_STYLE);
    Ok(ctx.text_node(text, spans, &base)?.into())
}

/// A blockquote: a padded frame with a left border around italic text.
pub fn render_blockquote<H: Host + ?Sized>(
    ctx: &mut RenderContext<'_, H>,
    text: &str,
    spans: &[Span],
) -> Result<VisualNode> {
    let style = ctx.style();
    let base = style.body_base("Italic");

    let mut quote = FrameNode::new(
        "Blockquote",
        AutoLayout::vertical(4.0, style.layout.quote_padding),
    )
    .with_stroke(style.border);
    quote.stroke_weights = StrokeWeights::left_only(1.0);
    quote.push(ctx.text_node(text, spans, &base)?);

    Ok(quote.into())
}
