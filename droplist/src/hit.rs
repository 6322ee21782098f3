use crate::element::{Content, Element};
use crate::layout::LayoutResult;
use crate::types::Position;

/// Find the deepest clickable element at the given coordinates.
///
/// Children are checked before their container, so a clickable control
/// nested inside a clickable container wins — clicks on it are contained
/// and never reach the container's handler. Absolute overlays (an open
/// dropdown list) paint above everything in normal flow, so they are
/// checked before any static element anywhere in the tree.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_by(layout, root, x, y, &|el| el.clickable)
}

/// Find the deepest element of any kind at the given coordinates.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_by(layout, root, x, y, &|_| true)
}

/// Find the deepest focusable element at the given coordinates.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_test_by(layout, root, x, y, &|el| el.focusable)
}

fn hit_test_by(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accepts: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    hit_overlays(layout, element, x, y, accepts)
        .or_else(|| hit_static(layout, element, x, y, accepts))
}

/// Search absolute subtrees anywhere below `element`, topmost first.
fn hit_overlays(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accepts: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let Content::Children(children) = &element.content else {
        return None;
    };

    // Later elements render on top, so check in reverse.
    for child in children.iter().rev() {
        let hit = if child.position == Position::Absolute {
            hit_test_by(layout, child, x, y, accepts)
        } else {
            hit_overlays(layout, child, x, y, accepts)
        };
        if hit.is_some() {
            return hit;
        }
    }

    None
}

/// Search normal-flow elements only; absolute subtrees were already covered
/// by the overlay pass.
fn hit_static(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accepts: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if child.position == Position::Absolute {
                continue;
            }
            if let Some(id) = hit_static(layout, child, x, y, accepts) {
                return Some(id);
            }
        }
    }

    let rect = layout.get(&element.id)?;
    if rect.contains(x, y) && accepts(element) {
        Some(element.id.clone())
    } else {
        None
    }
}
