//! JSON catalog files that replace the built-in screenshot set or brand colors.

use serde::Deserialize;

use super::error::InfrastructureError;
use crate::domain::catalog::ScreenshotCatalog;
use crate::domain::color::Color;
use crate::domain::screenshot::ScreenshotDefinition;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    background_top: Option<String>,
    background_bottom: Option<String>,
    screenshots: Option<Vec<ScreenshotDefinition>>,
}

/// Parses a catalog; fields that are absent keep the built-in defaults.
pub fn parse_catalog(bytes: &[u8]) -> Result<ScreenshotCatalog, InfrastructureError> {
    let file: CatalogFile = serde_json::from_slice(bytes)?;
    let mut catalog = ScreenshotCatalog::default();

    if let Some(hex) = file.background_top {
        catalog.background_top = Color::from_hex(&hex)?;
    }
    if let Some(hex) = file.background_bottom {
        catalog.background_bottom = Color::from_hex(&hex)?;
    }
    if let Some(screenshots) = file.screenshots {
        catalog.screenshots = screenshots;
    }

    catalog
        .validate()
        .map_err(|e| InfrastructureError::CatalogError(e.to_string()))?;
    Ok(catalog)
}
