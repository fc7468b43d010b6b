//! Fixed-region skin sampling.
//!
//! Four windows around the image center stand in for forehead, cheeks and
//! chin. There is no face detection: the subject is expected to be centered.

use serde::Deserialize;
use tracing::{debug, warn};

use super::skin::is_skin_sample;
use super::source::PixelSource;
use crate::color::PixelSample;
use crate::error::NoSkinDetected;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacialRegion {
    Forehead,
    LeftCheek,
    RightCheek,
    Chin,
}

impl FacialRegion {
    pub const ALL: [Self; 4] = [Self::Forehead, Self::LeftCheek, Self::RightCheek, Self::Chin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forehead => "forehead",
            Self::LeftCheek => "left-cheek",
            Self::RightCheek => "right-cheek",
            Self::Chin => "chin",
        }
    }
}

/// Tunables for the scan; the defaults reproduce the classic 1/8 radius,
/// every-third-pixel sampling.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SamplerOptions {
    /// Step between scanned coordinates on both axes.
    pub stride: u32,
    /// `radius = min(width, height) / radius_divisor`.
    pub radius_divisor: u32,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            stride: 3,
            radius_divisor: 8,
        }
    }
}

/// A rectangular sampling window. Coordinates are real-valued and floored
/// when a pixel is fetched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub kind: FacialRegion,
    pub center_x: f64,
    pub center_y: f64,
    pub half_width: f64,
    pub half_height: f64,
    pub stride: u32,
}

impl Region {
    /// The four fixed windows for an image of the given size.
    pub fn facial_regions(width: u32, height: u32, options: &SamplerOptions) -> [Region; 4] {
        let center_x = f64::from(width) / 2.0;
        let center_y = f64::from(height) / 2.0;
        let radius = f64::from(width.min(height)) / f64::from(options.radius_divisor.max(1));
        let half = radius / 4.0;
        let stride = options.stride.max(1);

        FacialRegion::ALL.map(|kind| {
            let (dx, dy) = match kind {
                FacialRegion::Forehead => (0.0, -radius / 2.0),
                FacialRegion::LeftCheek => (-radius / 3.0, 0.0),
                FacialRegion::RightCheek => (radius / 3.0, 0.0),
                FacialRegion::Chin => (0.0, radius / 3.0),
            };
            Region {
                kind,
                center_x: center_x + dx,
                center_y: center_y + dy,
                half_width: half,
                half_height: half,
                stride,
            }
        })
    }

    /// In-bounds pixel coordinates visited by this window, row-major.
    pub fn coordinates(&self, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        let step = f64::from(self.stride);
        let (x0, x1) = (self.center_x - self.half_width, self.center_x + self.half_width);
        let (y0, y1) = (self.center_y - self.half_height, self.center_y + self.half_height);
        axis(y0, y1, step).flat_map(move |y| {
            axis(x0, x1, step).filter_map(move |x| {
                let in_bounds = x >= 0.0 && x < f64::from(width) && y >= 0.0 && y < f64::from(height);
                in_bounds.then(|| (x.floor() as u32, y.floor() as u32))
            })
        })
    }
}

fn axis(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    std::iter::successors(Some(start), move |v| Some(v + step)).take_while(move |v| *v < end)
}

/// Running colour sums of accepted skin pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkinSamples {
    pub sum_r: u64,
    pub sum_g: u64,
    pub sum_b: u64,
    pub count: u64,
}

impl SkinSamples {
    pub fn add(&mut self, sample: PixelSample) {
        self.sum_r += u64::from(sample.r);
        self.sum_g += u64::from(sample.g);
        self.sum_b += u64::from(sample.b);
        self.count += 1;
    }

    /// Mean colour, rounded half up. `None` when nothing was accepted.
    pub fn average(&self) -> Option<PixelSample> {
        if self.count == 0 {
            return None;
        }
        let mean = |sum: u64| ((2 * sum + self.count) / (2 * self.count)).min(255) as u8;
        Some(PixelSample::new(
            mean(self.sum_r),
            mean(self.sum_g),
            mean(self.sum_b),
        ))
    }
}

/// Scans the facial regions with the default options.
pub fn sample_skin_regions<S>(
    source: &S,
    width: u32,
    height: u32,
) -> Result<SkinSamples, NoSkinDetected>
where
    S: PixelSource + ?Sized,
{
    sample_skin_regions_with(source, width, height, &SamplerOptions::default())
}

pub fn sample_skin_regions_with<S>(
    source: &S,
    width: u32,
    height: u32,
    options: &SamplerOptions,
) -> Result<SkinSamples, NoSkinDetected>
where
    S: PixelSource + ?Sized,
{
    // Regions follow the stated size; reads stay inside the stored grid.
    let (source_width, source_height) = source.dimensions();
    if (source_width, source_height) != (width, height) {
        warn!(width, height, source_width, source_height, "size differs from pixel source");
    }
    let (bound_x, bound_y) = (width.min(source_width), height.min(source_height));

    let mut samples = SkinSamples::default();
    for region in Region::facial_regions(width, height, options) {
        let before = samples.count;
        let mut scanned = 0usize;
        for (x, y) in region.coordinates(bound_x, bound_y) {
            scanned += 1;
            let pixel = source.pixel(x, y);
            if is_skin_sample(pixel) {
                samples.add(pixel);
            }
        }
        debug!(
            region = region.kind.as_str(),
            scanned,
            accepted = samples.count - before,
            "sampled region"
        );
    }

    if samples.count == 0 {
        debug!(width, height, "no skin pixels in any region");
        return Err(NoSkinDetected);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn regions_follow_image_center() {
        let regions = Region::facial_regions(800, 480, &SamplerOptions::default());
        // radius = 480 / 8 = 60
        assert_eq!(regions[0].kind, FacialRegion::Forehead);
        assert_eq!((regions[0].center_x, regions[0].center_y), (400.0, 210.0));
        assert_eq!((regions[1].center_x, regions[1].center_y), (380.0, 240.0));
        assert_eq!((regions[2].center_x, regions[2].center_y), (420.0, 240.0));
        assert_eq!((regions[3].center_x, regions[3].center_y), (400.0, 260.0));
        assert!(regions.iter().all(|r| r.half_width == 15.0 && r.stride == 3));
    }

    #[test]
    fn window_steps_by_stride() {
        let region = Region {
            kind: FacialRegion::Chin,
            center_x: 10.0,
            center_y: 10.0,
            half_width: 3.0,
            half_height: 3.0,
            stride: 3,
        };
        let coords: Vec<_> = region.coordinates(100, 100).collect();
        assert_eq!(coords, vec![(7, 7), (10, 7), (7, 10), (10, 10)]);
    }

    #[test]
    fn window_skips_out_of_bounds() {
        let region = Region {
            kind: FacialRegion::Forehead,
            center_x: 1.0,
            center_y: 1.0,
            half_width: 3.0,
            half_height: 3.0,
            stride: 3,
        };
        let coords: Vec<_> = region.coordinates(3, 3).collect();
        assert_eq!(coords, vec![(1, 1)]);
    }

    #[test]
    fn uniform_skin_image_averages_to_itself() {
        let image = RgbImage::from_pixel(160, 120, Rgb([200, 150, 110]));
        let samples = sample_skin_regions(&image, 160, 120).unwrap();
        assert!(samples.count > 0);
        assert_eq!(samples.average(), Some(PixelSample::new(200, 150, 110)));
    }

    #[test]
    fn black_and_white_images_have_no_skin() {
        for size in [8, 9, 64, 257] {
            let black = RgbImage::from_pixel(size, size, Rgb([0, 0, 0]));
            assert_eq!(sample_skin_regions(&black, size, size), Err(NoSkinDetected));
            let white = RgbImage::from_pixel(size, size, Rgb([255, 255, 255]));
            assert_eq!(sample_skin_regions(&white, size, size), Err(NoSkinDetected));
        }
    }

    #[test]
    fn oversized_dimensions_only_read_stored_pixels() {
        let image = RgbImage::from_pixel(10, 10, Rgb([200, 150, 110]));
        assert_eq!(sample_skin_regions(&image, 100, 100), Err(NoSkinDetected));

        // Stated 16x16 puts the windows around (8, 8), partly inside 12x12.
        let image = RgbImage::from_pixel(12, 12, Rgb([200, 150, 110]));
        let samples = sample_skin_regions(&image, 16, 16).unwrap();
        assert_eq!(samples.average(), Some(PixelSample::new(200, 150, 110)));
    }

    #[test]
    fn empty_image_has_no_skin() {
        let image = RgbImage::new(0, 0);
        assert_eq!(sample_skin_regions(&image, 0, 0), Err(NoSkinDetected));
    }

    #[test]
    fn average_rounds_half_up() {
        let samples = SkinSamples {
            sum_r: 201,
            sum_g: 300,
            sum_b: 3,
            count: 2,
        };
        assert_eq!(samples.average(), Some(PixelSample::new(101, 150, 2)));
        assert_eq!(SkinSamples::default().average(), None);
    }
}
