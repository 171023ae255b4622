use image::buffer::ConvertBuffer;
use image::{RgbImage, RgbaImage};

use super::error::InfrastructureError;

pub const OUTPUT_DPI: u32 = 72;

/// DPI expressed in the pixels-per-metre unit the PNG `pHYs` chunk uses.
pub fn pixels_per_meter(dpi: u32) -> u32 {
    (dpi as f64 / 0.0254).round() as u32
}

/// Encodes the canvas as an opaque 8-bit RGB PNG tagged with [`OUTPUT_DPI`].
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, InfrastructureError> {
    let rgb: RgbImage = canvas.convert();
    let ppm = pixels_per_meter(OUTPUT_DPI);

    let mut buffer = Vec::new();
    let mut encoder = png::Encoder::new(&mut buffer, rgb.width(), rgb.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgb.as_raw())?;
    writer.finish()?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::io::Cursor;

    #[test]
    fn test_pixels_per_meter_for_72_dpi() {
        assert_eq!(pixels_per_meter(72), 2835);
    }

    #[test]
    fn test_encoded_png_is_rgb_with_dpi() {
        let canvas = RgbaImage::from_pixel(7, 3, Rgba([1, 2, 3, 255]));
        let bytes = encode_png(&canvas).unwrap();

        let reader = png::Decoder::new(Cursor::new(&bytes)).read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (7, 3));
        assert_eq!(info.color_type, png::ColorType::Rgb);
        let dims = info.pixel_dims.unwrap();
        assert_eq!((dims.xppu, dims.yppu), (2835, 2835));
        assert_eq!(dims.unit, png::Unit::Meter);

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.get_pixel(6, 2).0, [1, 2, 3]);
    }
}
