use image::{RgbImage, RgbaImage};

use crate::color::PixelSample;

/// Read-only access to a fully populated pixel grid.
///
/// `pixel` is only called with `x < width` and `y < height` of
/// [`PixelSource::dimensions`].
pub trait PixelSource {
    /// `(width, height)` of the stored grid.
    fn dimensions(&self) -> (u32, u32);

    fn pixel(&self, x: u32, y: u32) -> PixelSample;
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn pixel(&self, x: u32, y: u32) -> PixelSample {
        PixelSample::from(self.get_pixel(x, y).0)
    }
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn pixel(&self, x: u32, y: u32) -> PixelSample {
        let [r, g, b, _] = self.get_pixel(x, y).0;
        PixelSample::new(r, g, b)
    }
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn pixel(&self, x: u32, y: u32) -> PixelSample {
        (**self).pixel(x, y)
    }
}

/// Tightly packed RGBA8 bytes, as produced by a canvas or a camera frame grab.
#[derive(Debug, Clone)]
pub struct RgbaFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbaFrame {
    /// Wraps `pixels`, returning `None` when the length does not match
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected_len = width as usize * height as usize * 4;
        if pixels.len() != expected_len {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}

impl From<RgbaImage> for RgbaFrame {
    fn from(image: RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
        }
    }
}

impl PixelSource for RgbaFrame {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn pixel(&self, x: u32, y: u32) -> PixelSample {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        PixelSample::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn frame_rejects_mismatched_length() {
        assert!(RgbaFrame::from_raw(2, 2, vec![0; 15]).is_none());
        assert!(RgbaFrame::from_raw(2, 2, vec![0; 16]).is_some());
    }

    #[test]
    fn frame_matches_image_layout() {
        let image = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8 * 10, y as u8 * 20, 7, 255]));
        let frame = RgbaFrame::from(image.clone());
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(frame.pixel(x, y), image.pixel(x, y));
            }
        }
        assert_eq!(frame.pixel(2, 1), PixelSample::new(20, 20, 7));
        assert_eq!(frame.dimensions(), (3, 2));
        assert_eq!((&image).dimensions(), (3, 2));
    }
}
