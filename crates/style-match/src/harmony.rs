//! Hue rotations of a base colour for outfit pairing.

use serde::Serialize;

use crate::color::{hsl_to_hex, parse_hex, rgb_to_hsl};
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorHarmony {
    pub complementary: String,
    pub analogous: [String; 2],
    pub triadic: [String; 2],
}

/// Complementary (+180°), analogous (±30°) and triadic (+120°, +240°)
/// colours at the base colour's saturation and lightness.
pub fn harmony_for_hex(hex: &str) -> Result<ColorHarmony, Error> {
    let hsl = rgb_to_hsl(parse_hex(hex)?);
    let rotate = |degrees: f64| hsl_to_hex(hsl.hue + degrees, hsl.saturation, hsl.lightness);
    Ok(ColorHarmony {
        complementary: rotate(180.0),
        analogous: [rotate(30.0), rotate(-30.0)],
        triadic: [rotate(120.0), rotate(240.0)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_red_harmony() {
        let harmony = harmony_for_hex("#ff0000").unwrap();
        assert_eq!(harmony.complementary, "#00ffff");
        let hues: Vec<u16> = harmony
            .analogous
            .iter()
            .map(|hex| rgb_to_hsl(parse_hex(hex).unwrap()).rounded().hue)
            .collect();
        assert_eq!(hues, vec![30, 330]);
        assert_eq!(harmony.triadic, ["#00ff00".to_string(), "#0000ff".to_string()]);
    }

    #[test]
    fn gray_has_gray_harmony() {
        let harmony = harmony_for_hex("#808080").unwrap();
        assert_eq!(harmony.complementary, "#808080");
        assert!(harmony.triadic.iter().all(|c| c == "#808080"));
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(harmony_for_hex("not-a-color").is_err());
    }
}
