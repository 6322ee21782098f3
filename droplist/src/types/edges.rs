/// Per-side spacing (padding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal spacing (left + right).
    pub const fn horizontal(&self) -> u16 {
        self.left + self.right
    }

    /// Total vertical spacing (top + bottom).
    pub const fn vertical(&self) -> u16 {
        self.top + self.bottom
    }
}
