use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use rusttype::{point, Font};

use crate::domain::layout::centered_x;
use crate::domain::text_overlay::TextOverlay;
use crate::infrastructure::font::{em_scale, FontSet};

/// Ink bounds of a line laid out from x = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtent {
    /// Offset of the leftmost inked column from the layout origin.
    pub left: i32,
    pub width: u32,
    pub height: u32,
}

pub fn measure_text(font: &Font<'_>, size: u32, text: &str) -> TextExtent {
    let scale = em_scale(font, size);
    let v_metrics = font.v_metrics(scale);
    let (min_x, max_x) = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .filter_map(|g| g.pixel_bounding_box())
        .fold((i32::MAX, i32::MIN), |(lo, hi), bb| (lo.min(bb.min.x), hi.max(bb.max.x)));

    let (left, width) = if max_x > min_x {
        (min_x, (max_x - min_x) as u32)
    } else {
        (0, 0)
    };
    TextExtent {
        left,
        width,
        height: (v_metrics.ascent - v_metrics.descent).ceil() as u32,
    }
}

/// Centers the overlay's ink horizontally and draws it with the top of its line at
/// `overlay.top`. Returns the layout origin used.
pub fn draw_centered_text(canvas: &mut RgbaImage, overlay: &TextOverlay, fonts: &FontSet) -> i32 {
    let font = fonts.face(overlay.bold);
    let extent = measure_text(font, overlay.size, &overlay.text);
    let x = centered_x(canvas.width(), extent.width) - extent.left;
    let color = overlay.color;

    draw_text_mut(
        canvas,
        Rgba([color.r, color.g, color.b, color.a]),
        x,
        overlay.top,
        em_scale(font, overlay.size),
        font,
        &overlay.text,
    );
    x
}
