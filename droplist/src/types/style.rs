use super::Color;

/// Visual style of an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }
}

/// Character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }
}
