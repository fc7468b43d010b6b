use std::path::PathBuf;

use crate::tone::{RgbaFrame, ToneAnalysis};

/// A decoded, upright image ready for sampling.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub path: PathBuf,
    pub frame: RgbaFrame,
}

/// Why a file in a batch produced no analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchFailure {
    Decode(String),
    NoSkinDetected,
}

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub path: PathBuf,
    pub result: Result<ToneAnalysis, BatchFailure>,
}
