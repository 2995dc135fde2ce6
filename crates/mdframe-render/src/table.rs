//! Table rendering.
//!
//! Renders tables as a vertical frame of horizontal rows. Every cell is a
//! padded, bordered frame; the cells of a row share the table width evenly,
//! so ragged rows simply get wider cells.

use mdframe_core::{Result, Row};

use crate::host::Host;
use crate::node::{AutoLayout, FrameNode, Sizing, VisualNode};
use crate::text::{RenderContext, TextBase};

/// Font style of the first row.
const HEADER_STYLE: &str = "Medium";

/// Font style of every other row.
const BODY_STYLE: &str = "Regular";

/// Width of each cell in a row of `cells` cells.
///
/// ```
/// use mdframe_render::cell_width;
/// assert_eq!(cell_width(600.0, 3), 200.0);
/// assert_eq!(cell_width(600.0, 0), 600.0);
/// ```
pub fn cell_width(table_width: f32, cells: usize) -> f32 {
    table_width / cells.max(1) as f32
}

/// Render a table. Row 0 is the header row.
pub fn render_table<H: Host + ?Sized>(
    ctx: &mut RenderContext<'_, H>,
    rows: &[Row],
) -> Result<VisualNode> {
    let style = ctx.style();
    let layout = &style.layout;

    let mut table = FrameNode::new("Table", AutoLayout::vertical(0.0, 0.0))
        .with_fill(style.code_background)
        .with_stroke(style.border);

    for (r, row) in rows.iter().enumerate() {
        let is_header = r == 0;
        let base = TextBase::new(
            style.body_font(if is_header { HEADER_STYLE } else { BODY_STYLE }),
            style.paragraph_size,
            style.formatted_text,
        );
        let width = cell_width(layout.table_width, row.len());

        let mut row_frame = FrameNode::new("Row", AutoLayout::horizontal(0.0, 0.0));
        for cell in row {
            let mut cell_frame =
                FrameNode::new("Cell", AutoLayout::vertical(0.0, layout.cell_padding))
                    .with_stroke(style.border);
            if is_header {
                cell_frame.fills.push(style.table_header_background);
            }
            cell_frame.sizing = Sizing::FixedWidth(width);
            cell_frame.push(ctx.text_node(&cell.text, &cell.spans, &base)?);
            row_frame.push(cell_frame);
        }
        table.push(row_frame);
    }

    Ok(table.into())
}
