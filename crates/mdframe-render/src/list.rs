//! List rendering.
//!
//! A list is a vertical frame of horizontal rows; each row holds a marker
//! text node and the item text node.

use mdframe_core::{ListItem, Result};

use crate::host::Host;
use crate::node::{AutoLayout, FrameNode, VisualNode};
use crate::text::RenderContext;

/// Marker of unordered list items.
pub const BULLET: &str = "•";

/// Marker for the item at `index` (0-based).
///
/// ```
/// use mdframe_render::list_marker;
/// assert_eq!(list_marker(false, 3), "•");
/// assert_eq!(list_marker(true, 0), "1.");
/// ```
pub fn list_marker(ordered: bool, index: usize) -> String {
    if ordered {
        format!("{}.", index + 1)
    } else {
        BULLET.to_string()
    }
}

/// Render a flat list.
///
/// Ordered lists are numbered from 1 regardless of the numbers written in
/// the source, and every item of an ordered list gets a number, including
/// items written with a bullet. The document keeps only the `ordered` flag,
/// not the source markers.
pub fn render_list<H: Host + ?Sized>(
    ctx: &mut RenderContext<'_, H>,
    ordered: bool,
    items: &[ListItem],
) -> Result<VisualNode> {
    let style = ctx.style();
    let layout = &style.layout;
    let base = style.body_base("Regular");

    let mut list = FrameNode::new("List", AutoLayout::vertical(layout.list_spacing, 0.0));
    for (index, item) in items.iter().enumerate() {
        let mut row = FrameNode::new(
            "List Item",
            AutoLayout::horizontal(layout.list_item_spacing, 0.0),
        );
        row.push(ctx.text_node(&list_marker(ordered, index), &[], &base)?);
        row.push(ctx.text_node(&item.text, &item.spans, &base)?);
        list.push(row);
    }

    Ok(list.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::RenderStyle;
    use mdframe_core::{Span, StyleAttrs};

    fn item(text: &str) -> ListItem {
        ListItem {
            text: text.to_string(),
            spans: Vec::new(),
        }
    }

    fn render(ordered: bool, items: &[ListItem]) -> VisualNode {
        let style = RenderStyle::default();
        let mut host = MemoryHost::new();
        let mut diagnostics = Vec::new();
        let mut ctx = RenderContext::new(&style, &mut host, &mut diagnostics);
        render_list(&mut ctx, ordered, items).unwrap()
    }

    fn markers(list: &VisualNode) -> Vec<String> {
        list.children()
            .iter()
            .map(|row| row.children()[0].as_text().unwrap().characters.clone())
            .collect()
    }

    #[test]
    fn test_unordered_markers() {
        let list = render(false, &[item("one"), item("two")]);
        assert_eq!(markers(&list), ["•", "•"]);
    }

    #[test]
    fn test_ordered_markers_count_from_one() {
        let list = render(true, &[item("a"), item("b"), item("c")]);
        assert_eq!(markers(&list), ["1.", "2.", "3."]);
    }

    #[test]
    fn test_row_layout() {
        let list = render(false, &[item("only")]);
        let frame = list.as_frame().unwrap();
        assert_eq!(frame.layout, AutoLayout::vertical(4.0, 0.0));

        let row = frame.children[0].as_frame().unwrap();
        assert_eq!(row.layout, AutoLayout::horizontal(8.0, 0.0));
        assert_eq!(row.children.len(), 2);
        assert_eq!(row.children[1].as_text().unwrap().characters, "only");
    }

    #[test]
    fn test_item_spans_applied() {
        let bold = ListItem {
            text: "bold item".to_string(),
            spans: vec![Span::new(0, 4, StyleAttrs::font_style("Bold"))],
        };
        let list = render(false, &[bold]);
        let text = list.children()[0].children()[1].as_text().unwrap();
        assert_eq!(text.ranges.len(), 1);
    }
}
