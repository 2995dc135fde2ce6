//! Code block rendering.

use mdframe_core::{char_len, Result, Span, StyleAttrs};

use crate::host::Host;
use crate::node::{AutoLayout, FrameNode, VisualNode};
use crate::text::{RenderContext, TextBase};

/// Gap between children of a code block frame.
pub const CODE_SPACING: f32 = 4.0;

/// Render a fenced code block: a rounded, bordered frame holding one
/// monospace text node. The text is never inline-formatted.
pub fn render_code_block<H: Host + ?Sized>(
    ctx: &mut RenderContext<'_, H>,
    text: &str,
) -> Result<VisualNode> {
    let style = ctx.style();
    let layout = &style.layout;

    let mut frame = FrameNode::new("Code", AutoLayout::vertical(CODE_SPACING, layout.code_padding))
        .with_fill(style.code_background)
        .with_stroke(style.border);
    frame.corner_radius = layout.corner_radius;

    let base = TextBase::new(style.mono_font(), style.paragraph_size, style.formatted_text);
    let whole = [Span::new(
        0,
        char_len(text),
        StyleAttrs::font_family(style.mono_font.as_str()),
    )];
    frame.push(ctx.text_node(text, &whole, &base)?);

    Ok(frame.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::RenderStyle;
    use mdframe_core::FontName;

    #[test]
    fn test_code_block_shape() {
        let style = RenderStyle::default();
        let mut host = MemoryHost::new();
        let mut diagnostics = Vec::new();
        let mut ctx = RenderContext::new(&style, &mut host, &mut diagnostics);

        let node = render_code_block(&mut ctx, "let x = 1;\nlet y = 2;").unwrap();
        let frame = node.as_frame().unwrap();
        assert_eq!(frame.layout, AutoLayout::vertical(4.0, 16.0));
        assert_eq!(frame.corner_radius, 6.0);
        assert_eq!(frame.fills, vec![style.code_background]);
        assert_eq!(frame.strokes, vec![style.border]);

        let text = frame.children[0].as_text().unwrap();
        let mono = FontName::new("Roboto Mono", "Regular");
        assert_eq!(text.font, mono);
        assert_eq!(text.characters, "let x = 1;\nlet y = 2;");
        assert_eq!(text.ranges.len(), 1);
        assert_eq!(text.ranges[0].start, 0);
        assert_eq!(text.ranges[0].end, 21);
        assert_eq!(text.ranges[0].font, Some(mono));
    }

    #[test]
    fn test_markup_inside_code_is_literal() {
        let style = RenderStyle::default();
        let mut host = MemoryHost::new();
        let mut diagnostics = Vec::new();
        let mut ctx = RenderContext::new(&style, &mut host, &mut diagnostics);

        let node = render_code_block(&mut ctx, "**not bold**").unwrap();
        let text = node.children()[0].as_text().unwrap();
        assert_eq!(text.characters, "**not bold**");
    }

    #[test]
    fn test_empty_code_block_has_no_ranges() {
        let style = RenderStyle::default();
        let mut host = MemoryHost::new();
        let mut diagnostics = Vec::new();
        let mut ctx = RenderContext::new(&style, &mut host, &mut diagnostics);

        let node = render_code_block(&mut ctx, "").unwrap();
        assert!(node.children()[0].as_text().unwrap().ranges.is_empty());
    }
}
