use std::path::PathBuf;

use crate::domain::color::Color;
use crate::infrastructure::error::InfrastructureError;

/// Everything needed to render one store screenshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionRequest {
    pub screen_path: PathBuf,
    pub headline: String,
    pub subheadline: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background_top: Color,
    pub background_bottom: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Encoded PNG.
    pub png_bytes: Vec<u8>,
    /// The capture was missing and a placeholder label was drawn instead.
    pub used_placeholder: bool,
}

#[cfg_attr(test, mockall::automock)]
pub trait ScreenshotCompositor {
    fn compose(&self, request: &CompositionRequest) -> Result<Composition, InfrastructureError>;
}
