//! Colour-space helpers shared by the classifier and the harmony/palette code.
//!
//! All conversions work on gamma-encoded sRGB, which is what cameras and
//! image files hand us and what hex strings describe.

use std::fmt;

use palette::encoding::Srgb as SrgbEncoding;
use palette::{FromColor, Hsl as PaletteHsl, RgbHue, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelSample {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, lowercase and zero padded.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS-style `rgb(r, g, b)`.
    pub fn rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn max_channel(&self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    pub fn min_channel(&self) -> u8 {
        self.r.min(self.g).min(self.b)
    }

    /// Difference between the strongest and weakest channel.
    pub fn spread(&self) -> u8 {
        self.max_channel() - self.min_channel()
    }

    fn to_unit(self) -> Srgb<f64> {
        Srgb::new(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    fn from_unit(rgb: Srgb<f64>) -> Self {
        Self {
            r: unit_to_channel(rgb.red),
            g: unit_to_channel(rgb.green),
            b: unit_to_channel(rgb.blue),
        }
    }
}

impl From<[u8; 3]> for PixelSample {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<PixelSample> for [u8; 3] {
    fn from(sample: PixelSample) -> Self {
        [sample.r, sample.g, sample.b]
    }
}

fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Unrounded HSL: hue in degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn rounded(&self) -> HslTriplet {
        let hue = (self.hue.round() as i64).rem_euclid(360) as u16;
        HslTriplet {
            hue,
            saturation: self.saturation.round().clamp(0.0, 100.0) as u8,
            lightness: self.lightness.round().clamp(0.0, 100.0) as u8,
        }
    }

    pub fn to_rgb(&self) -> PixelSample {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

/// Integer HSL as shown to users, e.g. `hsl(25, 74%, 79%)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HslTriplet {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl fmt::Display for HslTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

pub fn rgb_to_hsl(sample: PixelSample) -> Hsl {
    let hsl: PaletteHsl<SrgbEncoding, f64> = PaletteHsl::from_color(sample.to_unit());
    let hue = if sample.spread() == 0 {
        0.0
    } else {
        hsl.hue.into_positive_degrees()
    };
    Hsl {
        hue,
        saturation: hsl.saturation * 100.0,
        lightness: hsl.lightness * 100.0,
    }
}

/// Converts HSL (hue in degrees, saturation/lightness in percent) back to RGB.
/// Hue wraps modulo 360; percentages are clamped to `[0, 100]`.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> PixelSample {
    let hsl: PaletteHsl<SrgbEncoding, f64> = PaletteHsl::new(
        RgbHue::from_degrees(hue.rem_euclid(360.0)),
        (saturation / 100.0).clamp(0.0, 1.0),
        (lightness / 100.0).clamp(0.0, 1.0),
    );
    PixelSample::from_unit(Srgb::from_color(hsl))
}

pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    hsl_to_rgb(hue, saturation, lightness).hex()
}

/// Parses `#rrggbb` or `rrggbb` (either case).
pub fn parse_hex(input: &str) -> Result<PixelSample, Error> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex(input.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidHex(input.to_string()))
    };
    Ok(PixelSample::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
