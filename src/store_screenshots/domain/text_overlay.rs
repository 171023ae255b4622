use crate::domain::color::Color;

/// A single line of text, centered horizontally with its top edge at `top`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOverlay {
    pub text: String,
    pub color: Color,
    pub size: u32,
    pub bold: bool,
    pub top: i32,
}

impl TextOverlay {
    pub fn new(text: impl Into<String>, color: Color, size: u32, bold: bool, top: i32) -> Self {
        Self {
            text: text.into(),
            color,
            size,
            bold,
            top,
        }
    }
}
