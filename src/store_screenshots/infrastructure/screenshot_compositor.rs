use std::path::Path;

use image::{imageops, RgbaImage};

use super::error::InfrastructureError;
use crate::domain::color::Color;
use crate::domain::compositor_trait::{Composition, CompositionRequest, ScreenshotCompositor};
use crate::domain::layout::{CanvasLayout, FrameGeometry};
use crate::domain::text_overlay::TextOverlay;
use crate::infrastructure::device_frame::build_device_frame;
use crate::infrastructure::font::FontSet;
use crate::infrastructure::gradient::create_gradient;
use crate::infrastructure::png_encoder::encode_png;
use crate::infrastructure::text_renderer::draw_centered_text;

/// Output canvases are opaque RGB, so every text element is drawn solid.
const TEXT_COLOR: Color = Color::WHITE;

pub struct DefaultScreenshotCompositor {
    fonts: FontSet,
}

impl DefaultScreenshotCompositor {
    /// `fonts` are loaded once by the caller and shared by every composition.
    pub fn new(fonts: FontSet) -> Self {
        Self { fonts }
    }

    fn draw_headlines(
        &self,
        canvas: &mut RgbaImage,
        layout: &CanvasLayout,
        request: &CompositionRequest,
    ) {
        let headline = TextOverlay::new(
            request.headline.as_str(),
            TEXT_COLOR,
            layout.headline_size(),
            true,
            layout.headline_top(),
        );
        let subheadline = TextOverlay::new(
            request.subheadline.as_str(),
            TEXT_COLOR,
            layout.subheadline_size(),
            false,
            layout.subheadline_top(),
        );

        for overlay in [headline, subheadline] {
            draw_centered_text(canvas, &overlay, &self.fonts);
        }
    }

    fn draw_device(
        &self,
        canvas: &mut RgbaImage,
        layout: &CanvasLayout,
        screen_path: &Path,
    ) -> Result<(), InfrastructureError> {
        let screen = image::open(screen_path)?.to_rgba8();
        let geometry = FrameGeometry::for_canvas(layout.width, screen.width(), screen.height())?;
        let framed = build_device_frame(&screen, &geometry);

        let placement = layout.device_placement(&geometry);
        let framed = if placement.visible_height < framed.height() {
            log::debug!(
                "Cropping device frame from {} to {} rows",
                framed.height(),
                placement.visible_height
            );
            imageops::crop_imm(&framed, 0, 0, framed.width(), placement.visible_height).to_image()
        } else {
            framed
        };

        imageops::overlay(canvas, &framed, placement.x as i64, placement.y as i64);
        Ok(())
    }

    fn draw_placeholder(&self, canvas: &mut RgbaImage, layout: &CanvasLayout, screen_path: &Path) {
        let file_name = screen_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let overlay = TextOverlay::new(
            format!("[Screen: {}]", file_name),
            TEXT_COLOR,
            layout.placeholder_size(),
            false,
            layout.placeholder_top(),
        );
        draw_centered_text(canvas, &overlay, &self.fonts);
    }
}

impl ScreenshotCompositor for DefaultScreenshotCompositor {
    fn compose(&self, request: &CompositionRequest) -> Result<Composition, InfrastructureError> {
        let layout = CanvasLayout::new(request.canvas_width, request.canvas_height)?;
        let mut canvas = create_gradient(
            layout.width,
            layout.height,
            request.background_top,
            request.background_bottom,
        )?;

        self.draw_headlines(&mut canvas, &layout, request);

        let used_placeholder = if request.screen_path.exists() {
            self.draw_device(&mut canvas, &layout, &request.screen_path)?;
            false
        } else {
            log::warn!(
                "Screen capture {} not found, drawing placeholder",
                request.screen_path.display()
            );
            self.draw_placeholder(&mut canvas, &layout, &request.screen_path);
            true
        };

        let png_bytes = encode_png(&canvas)?;
        Ok(Composition {
            png_bytes,
            used_placeholder,
        })
    }
}
