use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

use crate::domain::layout::FrameGeometry;

pub const FRAME_FILL: Rgba<u8> = Rgba([30, 30, 30, 255]);
pub const FRAME_OUTLINE: Rgba<u8> = Rgba([60, 60, 60, 255]);
pub const OUTLINE_WIDTH: u32 = 2;

/// Scales `screen` to `geometry.screen_width` and wraps it in a rounded bezel.
/// Pixels outside the rounded corners stay fully transparent.
pub fn build_device_frame(screen: &RgbaImage, geometry: &FrameGeometry) -> RgbaImage {
    log::debug!("Device frame geometry: {:?}", geometry);

    let resized = imageops::resize(
        screen,
        geometry.screen_width,
        geometry.screen_height,
        FilterType::Lanczos3,
    );

    let mut frame = RgbaImage::new(geometry.frame_width, geometry.frame_height);
    fill_rounded_rect(
        &mut frame,
        0,
        0,
        geometry.frame_width,
        geometry.frame_height,
        geometry.corner_radius,
        FRAME_OUTLINE,
    );
    let inset = OUTLINE_WIDTH;
    if geometry.frame_width > inset * 2 && geometry.frame_height > inset * 2 {
        fill_rounded_rect(
            &mut frame,
            inset as i32,
            inset as i32,
            geometry.frame_width - inset * 2,
            geometry.frame_height - inset * 2,
            geometry.corner_radius.saturating_sub(inset),
            FRAME_FILL,
        );
    }

    imageops::replace(&mut frame, &resized, geometry.padding as i64, geometry.padding as i64);
    frame
}

/// Two overlapping rectangles plus a filled circle in each corner.
fn fill_rounded_rect(
    img: &mut RgbaImage,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    radius: u32,
    color: Rgba<u8>,
) {
    let r = radius.min(width / 2).min(height / 2);
    if r == 0 {
        draw_filled_rect_mut(img, Rect::at(x, y).of_size(width, height), color);
        return;
    }

    if width > 2 * r {
        draw_filled_rect_mut(img, Rect::at(x + r as i32, y).of_size(width - 2 * r, height), color);
    }
    if height > 2 * r {
        draw_filled_rect_mut(img, Rect::at(x, y + r as i32).of_size(width, height - 2 * r), color);
    }

    let left = x + r as i32;
    let right = x + width as i32 - 1 - r as i32;
    let top = y + r as i32;
    let bottom = y + height as i32 - 1 - r as i32;
    for center in [(left, top), (right, top), (left, bottom), (right, bottom)] {
        draw_filled_circle_mut(img, center, r as i32, color);
    }
}
