//! Per-pixel skin heuristic.
//!
//! Tuned for well-lit frontal skin. It is not a learned model and will
//! accept some wood, sand and warm-lit walls.

use crate::color::PixelSample;

const MIN_R: u8 = 60;
const MIN_G: u8 = 40;
const MIN_B: u8 = 20;
const MAX_CHANNEL: u8 = 250;
const MIN_SEPARATION: u8 = 15;

/// Returns `true` when `(r, g, b)` plausibly belongs to skin.
pub fn is_skin_pixel(r: u8, g: u8, b: u8) -> bool {
    if r < MIN_R || g < MIN_G || b < MIN_B {
        return false;
    }
    if r > MAX_CHANNEL || g > MAX_CHANNEL || b > MAX_CHANNEL {
        return false;
    }
    // r > g > b with clear steps between channels.
    if r > g && g > b && r - g >= MIN_SEPARATION && g - b >= MIN_SEPARATION {
        return true;
    }
    let sample = PixelSample::new(r, g, b);
    if sample.spread() < MIN_SEPARATION {
        return false;
    }
    r > 95 && g > 40 && b > 20 && r > g && r > b && r - g.min(b) > MIN_SEPARATION
}

pub fn is_skin_sample(sample: PixelSample) -> bool {
    is_skin_pixel(sample.r, sample.g, sample.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordered_warm_skin() {
        assert!(is_skin_pixel(200, 100, 50));
        assert!(is_skin_pixel(241, 194, 161));
        assert!(is_skin_pixel(166, 124, 82));
    }

    #[test]
    fn rejects_dark_pixels() {
        assert!(!is_skin_pixel(10, 10, 10));
        assert!(!is_skin_pixel(59, 200, 200));
        assert!(!is_skin_pixel(200, 39, 30));
        assert!(!is_skin_pixel(200, 150, 19));
    }

    #[test]
    fn rejects_overexposed_pixels() {
        assert!(!is_skin_pixel(255, 255, 255));
        assert!(!is_skin_pixel(251, 200, 150));
        assert!(!is_skin_pixel(200, 180, 251));
    }

    #[test]
    fn rejects_grayscale() {
        assert!(!is_skin_pixel(128, 128, 128));
        assert!(!is_skin_pixel(140, 130, 127));
    }

    #[test]
    fn falls_back_to_red_dominance() {
        // g == b fails the ordering rule but red still leads clearly.
        assert!(is_skin_pixel(180, 120, 120));
        // Blue-dominant colours never pass.
        assert!(!is_skin_pixel(100, 120, 200));
        // Red leads but is too dim for the fallback.
        assert!(!is_skin_pixel(95, 60, 60));
    }
}
