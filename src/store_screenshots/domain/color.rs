use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parses `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    pub fn from_hex(hex_str: &str) -> Result<Self, DomainError> {
        let hex = hex_str.trim().trim_start_matches('#');
        let invalid = || DomainError::InvalidColor(hex_str.to_string());

        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        match hex.len() {
            6 => Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
            8 => Ok(Color::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }
}
