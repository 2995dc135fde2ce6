//! Auto-layout pass.
//!
//! Text nodes and rectangles carry their own size. Frames are sized from
//! their children, bottom up, and children are placed along the frame's
//! main axis starting at the padding edge.

use crate::node::{FrameNode, LayoutMode, Point, Size, Sizing, VisualNode};

/// Size every frame in the tree and position its children.
///
/// Returns the size of `node`.
pub fn layout(node: &mut VisualNode) -> Size {
    match node {
        VisualNode::Frame(frame) => layout_frame(frame),
        VisualNode::Text(text) => text.size,
        VisualNode::Rectangle(rect) => rect.size,
    }
}

fn layout_frame(frame: &mut FrameNode) -> Size {
    let padding = frame.layout.padding;
    let spacing = frame.layout.spacing;
    let mode = frame.layout.mode;

    let mut main = 0.0f32;
    let mut cross = 0.0f32;
    for (i, child) in frame.children.iter_mut().enumerate() {
        let size = layout(child);
        if i > 0 {
            main += spacing;
        }

        let (along, across) = match mode {
            LayoutMode::Vertical => (size.height, size.width),
            LayoutMode::Horizontal => (size.width, size.height),
        };
        let offset = padding + main;
        child.set_position(match mode {
            LayoutMode::Vertical => Point::new(padding, offset),
            LayoutMode::Horizontal => Point::new(offset, padding),
        });

        main += along;
        cross = cross.max(across);
    }

    let (content_width, content_height) = match mode {
        LayoutMode::Vertical => (cross, main),
        LayoutMode::Horizontal => (main, cross),
    };
    let width = match frame.sizing {
        Sizing::Hug => content_width + 2.0 * padding,
        Sizing::FixedWidth(width) => width,
    };

    frame.size = Size::new(width, content_height + 2.0 * padding);
    frame.size
}

/// Place `node` so its centre sits on `center`.
pub fn center_on(node: &mut VisualNode, center: Point) {
    let size = node.size();
    node.set_position(Point::new(
        center.x - size.width / 2.0,
        center.y - size.height / 2.0,
    ));
}
