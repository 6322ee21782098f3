use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Position, Size};

/// A rectangle in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Computed rects for every element in the tree, keyed by element ID.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }
}

/// Lay out the element tree within `available`.
///
/// A single measure-and-place pass: rows and columns stack their static
/// children along the main axis with `gap` between them, `Fill` children
/// split whatever the fixed/auto siblings leave over, and `Absolute`
/// children are taken out of flow and placed against the parent's origin.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let (w, h) = resolved_size(root, available.width, available.height);
    place(
        root,
        Rect::new(available.x, available.y, w, h),
        &mut result,
    );
    result
}

/// Content size of an element, ignoring any `Fill` constraint.
fn intrinsic_size(element: &Element) -> (u16, u16) {
    let pad = element.padding;

    let (content_w, content_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (display_width(text) as u16, 1),
        Content::Children(children) => {
            let mut main: u16 = 0;
            let mut cross: u16 = 0;
            let mut flowing = 0;

            for child in children {
                if child.position == Position::Absolute {
                    continue;
                }
                let (cw, ch) = intrinsic_size(child);
                match element.direction {
                    Direction::Row => {
                        main = main.saturating_add(cw);
                        cross = cross.max(ch);
                    }
                    Direction::Column => {
                        main = main.saturating_add(ch);
                        cross = cross.max(cw);
                    }
                }
                flowing += 1;
            }

            if flowing > 1 {
                main = main.saturating_add(element.gap * (flowing - 1));
            }

            match element.direction {
                Direction::Row => (main, cross),
                Direction::Column => (cross, main),
            }
        }
    };

    let mut w = content_w.saturating_add(pad.horizontal());
    let mut h = content_h.saturating_add(pad.vertical());

    if let Size::Fixed(fixed) = element.width {
        w = fixed;
    }
    if let Size::Fixed(fixed) = element.height {
        h = fixed;
    }

    (w, h)
}

/// Resolve an element's size given the space its parent offers.
fn resolved_size(element: &Element, avail_w: u16, avail_h: u16) -> (u16, u16) {
    let (iw, ih) = intrinsic_size(element);
    let w = match element.width {
        Size::Fixed(fixed) => fixed,
        Size::Auto => iw,
        Size::Fill => avail_w,
    };
    let h = match element.height {
        Size::Fixed(fixed) => fixed,
        Size::Auto => ih,
        Size::Fill => avail_h,
    };
    (w, h)
}

fn place(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };

    let pad = element.padding;
    let inner = Rect::new(
        rect.x.saturating_add(pad.left),
        rect.y.saturating_add(pad.top),
        rect.width.saturating_sub(pad.horizontal()),
        rect.height.saturating_sub(pad.vertical()),
    );

    // Main-axis budget left over for Fill children.
    let inner_main = match element.direction {
        Direction::Row => inner.width,
        Direction::Column => inner.height,
    };
    let mut used: u16 = 0;
    let mut fills: u16 = 0;
    let mut flowing: u16 = 0;
    for child in children {
        if child.position == Position::Absolute {
            continue;
        }
        flowing += 1;
        let main_constraint = match element.direction {
            Direction::Row => child.width,
            Direction::Column => child.height,
        };
        match main_constraint {
            Size::Fill => fills += 1,
            _ => {
                let (iw, ih) = intrinsic_size(child);
                used = used.saturating_add(match element.direction {
                    Direction::Row => iw,
                    Direction::Column => ih,
                });
            }
        }
    }
    if flowing > 1 {
        used = used.saturating_add(element.gap * (flowing - 1));
    }
    let fill_share = if fills > 0 {
        inner_main.saturating_sub(used) / fills
    } else {
        0
    };

    // Place static children along the main axis.
    let mut cursor_x = inner.x;
    let mut cursor_y = inner.y;
    for child in children {
        if child.position == Position::Absolute {
            continue;
        }

        let (mut cw, mut ch) = resolved_size(child, inner.width, inner.height);
        match element.direction {
            Direction::Row => {
                if child.width == Size::Fill {
                    cw = fill_share;
                }
            }
            Direction::Column => {
                if child.height == Size::Fill {
                    ch = fill_share;
                }
            }
        }

        place(child, Rect::new(cursor_x, cursor_y, cw, ch), result);

        match element.direction {
            Direction::Row => cursor_x = cursor_x.saturating_add(cw + element.gap),
            Direction::Column => cursor_y = cursor_y.saturating_add(ch + element.gap),
        }
    }

    // Absolute children are placed against the parent rect, out of flow.
    for child in children {
        if child.position != Position::Absolute {
            continue;
        }
        let (cw, ch) = resolved_size(child, inner.width, inner.height);
        let x = (rect.x as i32 + child.left as i32).max(0) as u16;
        let y = (rect.y as i32 + child.top as i32).max(0) as u16;
        place(child, Rect::new(x, y, cw, ch), result);
    }
}
