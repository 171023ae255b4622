use image::{Rgba, RgbaImage};

use crate::domain::color::Color;
use crate::domain::error::DomainError;

/// Vertical linear gradient. Row `y` is `top + (bottom - top) * y / height`, truncated.
pub fn create_gradient(
    width: u32,
    height: u32,
    top: Color,
    bottom: Color,
) -> Result<RgbaImage, DomainError> {
    if width == 0 || height == 0 {
        return Err(DomainError::InvalidDimensions { width, height });
    }

    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        let ratio = y as f64 / height as f64;
        let lerp = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * ratio) as u8;
        let row_color = Rgba([lerp(top.r, bottom.r), lerp(top.g, bottom.g), lerp(top.b, bottom.b), 255]);
        for x in 0..width {
            img.put_pixel(x, y, row_color);
        }
    }
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: Color = Color::rgb(26, 26, 46);
    const BOTTOM: Color = Color::rgb(10, 126, 164);

    fn within(actual: u8, expected: u8, tolerance: u8) -> bool {
        actual.abs_diff(expected) <= tolerance
    }

    #[test]
    fn test_first_row_is_top_color() {
        let img = create_gradient(8, 300, TOP, BOTTOM).unwrap();
        for x in 0..8 {
            assert_eq!(*img.get_pixel(x, 0), Rgba([26, 26, 46, 255]));
        }
    }

    #[test]
    fn test_last_row_approaches_bottom_color() {
        let height = 300;
        let img = create_gradient(4, height, TOP, BOTTOM).unwrap();
        let last = img.get_pixel(0, height - 1);
        // One row short of the full ratio, plus truncation.
        assert!(within(last[0], BOTTOM.r, 1), "{last:?}");
        assert!(within(last[1], BOTTOM.g, 1), "{last:?}");
        assert!(within(last[2], BOTTOM.b, 1), "{last:?}");
        assert_eq!(last[3], 255);
    }

    #[test]
    fn test_rows_are_flat() {
        let img = create_gradient(5, 10, TOP, BOTTOM).unwrap();
        for y in 0..10 {
            let first = img.get_pixel(0, y);
            assert!((0..5).all(|x| img.get_pixel(x, y) == first));
        }
    }

    #[test]
    fn test_gradient_is_deterministic() {
        let a = create_gradient(16, 64, TOP, BOTTOM).unwrap();
        let b = create_gradient(16, 64, TOP, BOTTOM).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            create_gradient(0, 10, TOP, BOTTOM),
            Err(DomainError::InvalidDimensions { width: 0, height: 10 })
        );
    }
}
