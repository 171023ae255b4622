//! Proportional layout of a store screenshot.
//!
//! Every offset and size is a fixed fraction of the canvas so the composition looks the
//! same on each device profile. Fractions are applied in `f64` and truncated.

use crate::domain::error::DomainError;

pub const HEADLINE_SIZE_RATIO: f64 = 0.065;
pub const SUBHEADLINE_SIZE_RATIO: f64 = 0.032;
pub const PLACEHOLDER_SIZE_RATIO: f64 = 0.04;
pub const HEADLINE_TOP_RATIO: f64 = 0.06;
pub const SUBHEADLINE_GAP_RATIO: f64 = 0.015;
pub const DEVICE_TOP_RATIO: f64 = 0.22;
pub const DEVICE_WIDTH_RATIO: f64 = 0.70;
pub const FRAME_PADDING_RATIO: f64 = 0.03;
pub const CORNER_RADIUS_RATIO: f64 = 0.06;

fn fraction(value: u32, ratio: f64) -> u32 {
    (value as f64 * ratio) as u32
}

/// Left edge that centers `content_width` on `canvas_width`, rounding toward negative infinity.
pub fn centered_x(canvas_width: u32, content_width: u32) -> i32 {
    (canvas_width as i64 - content_width as i64).div_euclid(2) as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    pub width: u32,
    pub height: u32,
}

impl CanvasLayout {
    pub fn new(width: u32, height: u32) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn headline_size(&self) -> u32 {
        fraction(self.width, HEADLINE_SIZE_RATIO)
    }

    pub fn subheadline_size(&self) -> u32 {
        fraction(self.width, SUBHEADLINE_SIZE_RATIO)
    }

    pub fn placeholder_size(&self) -> u32 {
        fraction(self.width, PLACEHOLDER_SIZE_RATIO)
    }

    pub fn headline_top(&self) -> i32 {
        fraction(self.height, HEADLINE_TOP_RATIO) as i32
    }

    /// The subheadline sits one headline em plus a small gap below the headline.
    pub fn subheadline_top(&self) -> i32 {
        self.headline_top()
            + self.headline_size() as i32
            + fraction(self.height, SUBHEADLINE_GAP_RATIO) as i32
    }

    pub fn placeholder_top(&self) -> i32 {
        (self.height / 2) as i32
    }

    /// Where a frame of the given size lands, and how many of its rows stay visible.
    pub fn device_placement(&self, frame: &FrameGeometry) -> DevicePlacement {
        let y = fraction(self.height, DEVICE_TOP_RATIO);
        let visible_height = frame.frame_height.min(self.height - y);
        DevicePlacement {
            x: centered_x(self.width, frame.frame_width),
            y: y as i32,
            visible_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevicePlacement {
    pub x: i32,
    pub y: i32,
    pub visible_height: u32,
}

/// Sizes of the scaled capture and the bezel drawn around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    pub screen_width: u32,
    pub screen_height: u32,
    pub padding: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub corner_radius: u32,
}

impl FrameGeometry {
    pub fn for_canvas(
        canvas_width: u32,
        source_width: u32,
        source_height: u32,
    ) -> Result<Self, DomainError> {
        if source_width == 0 || source_height == 0 {
            return Err(DomainError::InvalidDimensions {
                width: source_width,
                height: source_height,
            });
        }
        let screen_width = fraction(canvas_width, DEVICE_WIDTH_RATIO).max(1);
        let aspect = source_height as f64 / source_width as f64;
        let screen_height = ((screen_width as f64 * aspect) as u32).max(1);

        let padding = fraction(screen_width, FRAME_PADDING_RATIO);
        let frame_width = screen_width + padding * 2;
        let frame_height = screen_height + padding * 2;

        Ok(Self {
            screen_width,
            screen_height,
            padding,
            frame_width,
            frame_height,
            corner_radius: fraction(frame_width, CORNER_RADIUS_RATIO),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_canvas() {
        assert_eq!(
            CanvasLayout::new(0, 100),
            Err(DomainError::InvalidDimensions { width: 0, height: 100 })
        );
    }

    #[test]
    fn test_text_metrics_for_iphone_6_1() {
        let layout = CanvasLayout::new(1170, 2532).unwrap();
        assert_eq!(layout.headline_size(), 76);
        assert_eq!(layout.subheadline_size(), 37);
        assert_eq!(layout.placeholder_size(), 46);
        assert_eq!(layout.headline_top(), 151);
        assert_eq!(layout.subheadline_top(), 151 + 76 + 37);
        assert_eq!(layout.placeholder_top(), 1266);
    }

    #[test]
    fn test_centered_x_floors_negative_offsets() {
        assert_eq!(centered_x(100, 40), 30);
        assert_eq!(centered_x(100, 41), 29);
        assert_eq!(centered_x(100, 103), -2);
    }

    #[test]
    fn test_frame_width_is_proportional_to_canvas() {
        for (canvas_width, source) in [(1170, (1290, 2796)), (2064, (100, 100)), (1320, (300, 50))] {
            let frame = FrameGeometry::for_canvas(canvas_width, source.0, source.1).unwrap();
            let device_width = (canvas_width as f64 * 0.70) as u32;
            let padding = (device_width as f64 * 0.03) as u32;
            assert_eq!(frame.screen_width, device_width);
            assert_eq!(frame.frame_width, device_width + 2 * padding);
            assert_eq!(frame.frame_height, frame.screen_height + 2 * padding);
        }
    }

    #[test]
    fn test_frame_geometry_for_pro_max_capture() {
        // 1290 * 0.70 lands just below 903 in f64 and truncates to 902.
        let frame = FrameGeometry::for_canvas(1290, 1290, 2796).unwrap();
        assert_eq!(frame.screen_width, 902);
        assert_eq!(frame.screen_height, 1955);
        assert_eq!(frame.padding, 27);
        assert_eq!(frame.frame_width, 956);
        assert_eq!(frame.frame_height, 2009);
        assert_eq!(frame.corner_radius, 57);
    }

    #[test]
    fn test_device_placement_fits_phone_canvas() {
        let layout = CanvasLayout::new(1290, 2796).unwrap();
        let frame = FrameGeometry::for_canvas(1290, 1290, 2796).unwrap();
        let placement = layout.device_placement(&frame);
        assert_eq!(placement.x, 167);
        assert_eq!(placement.y, 615);
        assert_eq!(placement.visible_height, frame.frame_height);
    }

    #[test]
    fn test_device_placement_crops_overflow() {
        let layout = CanvasLayout::new(2064, 2752).unwrap();
        let frame = FrameGeometry::for_canvas(2064, 1290, 2796).unwrap();
        assert_eq!(frame.frame_height, 3215);
        let placement = layout.device_placement(&frame);
        assert_eq!(placement.y, 605);
        assert_eq!(placement.visible_height, 2752 - 605);
    }

    #[test]
    fn test_device_placement_keeps_short_frames_whole() {
        let layout = CanvasLayout::new(2064, 2752).unwrap();
        let frame = FrameGeometry::for_canvas(2064, 400, 300).unwrap();
        assert_eq!(layout.device_placement(&frame).visible_height, frame.frame_height);
    }

    #[test]
    fn test_rejects_empty_source() {
        assert!(FrameGeometry::for_canvas(1170, 0, 10).is_err());
    }
}
