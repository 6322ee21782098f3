/// Main axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// Size constraint along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Exactly this many cells.
    Fixed(u16),
    /// Size to content.
    #[default]
    Auto,
    /// Take the remaining space in the parent.
    Fill,
}

/// Positioning scheme for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Laid out in normal flow.
    #[default]
    Static,
    /// Removed from flow, placed relative to the parent via `top`/`left`.
    Absolute,
}
