use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Direction, Edges, Position, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// What an element holds.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// A node in the declarative UI tree.
///
/// Elements are rebuilt from application state every frame; identity across
/// frames comes from the `id` field, which layout and hit testing key on.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub content: Content,

    // Box model
    pub width: Size,
    pub height: Size,
    pub padding: Edges,

    // Flow
    pub direction: Direction,
    pub gap: u16,
    pub position: Position,
    pub top: i16,
    pub left: i16,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// Set by the host when this element currently holds focus.
    pub focused: bool,

    // Visual
    pub style: Style,
    pub style_focused: Option<Style>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            direction: Direction::Column,
            gap: 0,
            position: Position::Static,
            top: 0,
            left: 0,
            focusable: false,
            clickable: false,
            focused: false,
            style: Style::default(),
            style_focused: None,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, top: i16) -> Self {
        self.top = top;
        self
    }

    pub fn left(mut self, left: i16) -> Self {
        self.left = left;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    /// The style to paint with, given current focus.
    pub fn effective_style(&self) -> &Style {
        if self.focused {
            if let Some(style) = &self.style_focused {
                return style;
            }
        }
        &self.style
    }
}

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}
