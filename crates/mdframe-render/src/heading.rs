//! Heading rendering.
//!
//! Headings are single text nodes in the bold body font, sized by level:
//! - h1: 20
//! - h2: 18
//! - h3: 16
//! - h4: 14
//! - h5: 12
//! - h6: 10

use mdframe_core::{Result, Span};

use crate::host::Host;
use crate::node::VisualNode;
use crate::text::{RenderContext, TextBase};

/// Render a heading.
///
/// # Arguments
/// * `level` - Heading level (1-6)
/// * `text` - Plain heading text
/// * `spans` - Inline formatting of `text`
pub fn render_heading<H: Host + ?Sized>(
    ctx: &mut RenderContext<'_, H>,
    level: u8,
    text: &str,
    spans: &[Span],
) -> Result<VisualNode> {
    let style = ctx.style();
    let base = TextBase::new(
        style.body_font("Bold"),
        style.heading_size(level),
        style.formatted_text,
    );
    Ok(ctx.text_node(text, spans, &base)?.into())
}
