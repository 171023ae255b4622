use crate::domain::color::Color;
use crate::domain::error::DomainError;
use crate::domain::screenshot::{default_screenshots, ScreenshotDefinition};

pub const BRAND_COLOR_TOP: Color = Color::rgb(26, 26, 46); // #1A1A2E
pub const BRAND_COLOR_BOTTOM: Color = Color::rgb(10, 126, 164); // #0A7EA4

/// Brand colors and the ordered screenshots rendered for every device.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenshotCatalog {
    pub background_top: Color,
    pub background_bottom: Color,
    pub screenshots: Vec<ScreenshotDefinition>,
}

impl Default for ScreenshotCatalog {
    fn default() -> Self {
        Self {
            background_top: BRAND_COLOR_TOP,
            background_bottom: BRAND_COLOR_BOTTOM,
            screenshots: default_screenshots(),
        }
    }
}

impl ScreenshotCatalog {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.screenshots.is_empty() {
            return Err(DomainError::InvalidInput("catalog has no screenshots".to_string()));
        }
        self.screenshots.iter().try_for_each(ScreenshotDefinition::validate)
    }
}
