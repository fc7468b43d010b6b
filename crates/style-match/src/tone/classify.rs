//! Average colour → undertone, brightness bucket and confidence.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{HslTriplet, PixelSample, rgb_to_hsl};

const BASE_CONFIDENCE: i32 = 85;
const MIN_CONFIDENCE: i32 = 75;
const MAX_CONFIDENCE: i32 = 98;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl Undertone {
    pub const ALL: [Self; 3] = [Self::Warm, Self::Cool, Self::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Neutral => "neutral",
        }
    }

    pub fn capitalized(&self) -> &'static str {
        match self {
            Self::Warm => "Warm",
            Self::Cool => "Cool",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Six ordered lightness categories, darkest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BrightnessBucket {
    #[serde(rename = "Deep")]
    Deep,
    #[serde(rename = "Medium-Deep")]
    MediumDeep,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Light-Medium")]
    LightMedium,
    #[serde(rename = "Light")]
    Light,
    #[serde(rename = "Very Light")]
    VeryLight,
}

impl BrightnessBucket {
    /// Buckets by luma; each threshold is an exclusive upper bound.
    pub fn from_luma(luma: f64) -> Self {
        if luma < 70.0 {
            Self::Deep
        } else if luma < 100.0 {
            Self::MediumDeep
        } else if luma < 130.0 {
            Self::Medium
        } else if luma < 160.0 {
            Self::LightMedium
        } else if luma < 190.0 {
            Self::Light
        } else {
            Self::VeryLight
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deep => "Deep",
            Self::MediumDeep => "Medium-Deep",
            Self::Medium => "Medium",
            Self::LightMedium => "Light-Medium",
            Self::Light => "Light",
            Self::VeryLight => "Very Light",
        }
    }
}

impl fmt::Display for BrightnessBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one averaged skin colour. Built by [`classify`];
/// deserializing keeps only `rgb` and classifies it again, so stored
/// derived fields can never disagree with the colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "StoredTone")]
pub struct ToneAnalysis {
    rgb: PixelSample,
    hex: String,
    hsl: HslTriplet,
    undertone: Undertone,
    brightness_bucket: BrightnessBucket,
    brightness: u8,
    category: String,
    confidence: u8,
}

#[derive(Deserialize)]
struct StoredTone {
    rgb: PixelSample,
}

impl From<StoredTone> for ToneAnalysis {
    fn from(stored: StoredTone) -> Self {
        classify(stored.rgb.r, stored.rgb.g, stored.rgb.b)
    }
}

impl ToneAnalysis {
    pub fn rgb(&self) -> PixelSample {
        self.rgb
    }

    pub fn rgb_string(&self) -> String {
        self.rgb.rgb_string()
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn hsl(&self) -> HslTriplet {
        self.hsl
    }

    pub fn hsl_string(&self) -> String {
        self.hsl.to_string()
    }

    pub fn undertone(&self) -> Undertone {
        self.undertone
    }

    pub fn brightness_bucket(&self) -> BrightnessBucket {
        self.brightness_bucket
    }

    /// Rounded luma.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// `"<bucket> <Undertone>"`, e.g. `Light-Medium Warm`.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn confidence(&self) -> u8 {
        self.confidence
    }
}

/// ITU-R BT.601 luma.
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// Ratio rules are evaluated in priority order; the first match wins.
pub fn determine_undertone(r: u8, g: u8, b: u8) -> Undertone {
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let ratio_rg = rf / gf;
    let ratio_rb = rf / bf;
    let ratio_gb = gf / bf;

    if ratio_rg > 1.1 && ratio_rb > 1.2 {
        return Undertone::Warm;
    }
    if ratio_rb > 1.3 && ratio_gb < 1.1 {
        return Undertone::Cool;
    }
    if b > r && b > g {
        return Undertone::Cool;
    }
    if (ratio_rg - 1.0).abs() < 0.1 && (ratio_rb - 1.1).abs() < 0.2 {
        return Undertone::Neutral;
    }
    if r > g && r > b {
        Undertone::Warm
    } else {
        Undertone::Neutral
    }
}

/// Heuristic score in `[75, 98]` from channel spread and luma range.
pub fn confidence(sample: PixelSample, luma: f64) -> u8 {
    let spread = sample.spread();
    let mut score = BASE_CONFIDENCE;
    if spread > 50 {
        score += 10;
    }
    if spread < 20 {
        score -= 15;
    }
    if luma > 50.0 && luma < 200.0 {
        score += 5;
    }
    score.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8
}

/// Classifies an averaged skin colour. Total over `[0, 255]` per channel.
pub fn classify(r: u8, g: u8, b: u8) -> ToneAnalysis {
    let rgb = PixelSample::new(r, g, b);
    let undertone = determine_undertone(r, g, b);
    let luma = luma(r, g, b);
    let brightness_bucket = BrightnessBucket::from_luma(luma);
    ToneAnalysis {
        rgb,
        hex: rgb.hex(),
        hsl: rgb_to_hsl(rgb).rounded(),
        undertone,
        brightness_bucket,
        brightness: luma.round().clamp(0.0, 255.0) as u8,
        category: format!("{} {}", brightness_bucket, undertone.capitalized()),
        confidence: confidence(rgb, luma),
    }
}
