//! Canned skin tones for running the classifier without a camera.

use rand::Rng;

use super::classify::{ToneAnalysis, classify};
use crate::color::PixelSample;

/// Representative skin tones, light to deep.
pub const DEMO_PALETTE: [PixelSample; 5] = [
    PixelSample::new(241, 194, 161),
    PixelSample::new(232, 180, 160),
    PixelSample::new(212, 165, 116),
    PixelSample::new(193, 150, 96),
    PixelSample::new(166, 124, 82),
];

/// Picks a palette entry uniformly and classifies it directly; the sampler
/// and skin filter are skipped because every entry is already a skin tone.
pub fn run_demo<R: Rng + ?Sized>(rng: &mut R) -> ToneAnalysis {
    let pick = DEMO_PALETTE[rng.random_range(0..DEMO_PALETTE.len())];
    classify(pick.r, pick.g, pick.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::skin::is_skin_sample;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn palette_entries_are_skin() {
        assert!(DEMO_PALETTE.iter().copied().all(is_skin_sample));
    }

    #[test]
    fn demo_result_comes_from_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let analysis = run_demo(&mut rng);
            assert!(DEMO_PALETTE.contains(&analysis.rgb()));
        }
    }

    #[test]
    fn seeded_demo_is_reproducible() {
        let a = run_demo(&mut StdRng::seed_from_u64(42));
        let b = run_demo(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
