//! Skin-tone sampling and classification.
//!
//! Stateless: every entry point is a pure function of its inputs, so one
//! module serves the beauty and wardrobe views alike.

pub mod classify;
pub mod demo;
pub mod sampler;
pub mod skin;
pub mod source;

pub use classify::{BrightnessBucket, ToneAnalysis, Undertone, classify};
pub use demo::{DEMO_PALETTE, run_demo};
pub use sampler::{
    FacialRegion, Region, SamplerOptions, SkinSamples, sample_skin_regions,
    sample_skin_regions_with,
};
pub use skin::is_skin_pixel;
pub use source::{PixelSource, RgbaFrame};

use crate::error::NoSkinDetected;

/// Samples the facial regions of a fully populated buffer and classifies
/// the average skin colour.
pub fn classify_skin_tone<S>(
    source: &S,
    width: u32,
    height: u32,
) -> Result<ToneAnalysis, NoSkinDetected>
where
    S: PixelSource + ?Sized,
{
    classify_skin_tone_with(source, width, height, &SamplerOptions::default())
}

pub fn classify_skin_tone_with<S>(
    source: &S,
    width: u32,
    height: u32,
    options: &SamplerOptions,
) -> Result<ToneAnalysis, NoSkinDetected>
where
    S: PixelSource + ?Sized,
{
    let samples = sample_skin_regions_with(source, width, height, options)?;
    let average = samples.average().ok_or(NoSkinDetected)?;
    Ok(classify(average.r, average.g, average.b))
}

/// Like [`classify_skin_tone_with`], taking the size from the source itself.
pub fn classify_image<S>(
    source: &S,
    options: &SamplerOptions,
) -> Result<ToneAnalysis, NoSkinDetected>
where
    S: PixelSource + ?Sized,
{
    let (width, height) = source.dimensions();
    classify_skin_tone_with(source, width, height, options)
}

/// Classifies a known colour without sampling (demo palette, colour pickers).
pub fn classify_fixed_color(r: u8, g: u8, b: u8) -> ToneAnalysis {
    classify(r, g, b)
}
