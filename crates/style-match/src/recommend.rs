//! Wardrobe and makeup guidance keyed by undertone and season.

use serde::Serialize;

use crate::color::PixelSample;
use crate::season::Season;
use crate::tone::Undertone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedColor {
    pub name: &'static str,
    pub hex: &'static str,
}

const fn swatch(name: &'static str, hex: &'static str) -> NamedColor {
    NamedColor { name, hex }
}

const COOL_BEST: &[NamedColor] = &[
    swatch("Navy Blue", "#1e3a8a"),
    swatch("Emerald", "#059669"),
    swatch("Purple", "#7c3aed"),
    swatch("Pink", "#ec4899"),
    swatch("Silver Gray", "#6b7280"),
    swatch("Pure White", "#ffffff"),
];

const WARM_BEST: &[NamedColor] = &[
    swatch("Coral", "#f97316"),
    swatch("Golden Yellow", "#fbbf24"),
    swatch("Olive Green", "#65a30d"),
    swatch("Rust Orange", "#ea580c"),
    swatch("Cream", "#fef3c7"),
    swatch("Chocolate", "#92400e"),
];

const NEUTRAL_BEST: &[NamedColor] = &[
    swatch("Soft Pink", "#f9a8d4"),
    swatch("Sage Green", "#84cc16"),
    swatch("Dusty Blue", "#60a5fa"),
    swatch("Lavender", "#a78bfa"),
    swatch("Beige", "#d6d3d1"),
    swatch("Charcoal", "#374151"),
];

const COOL_AVOID: &[NamedColor] = &[
    swatch("Orange", "#ea580c"),
    swatch("Yellow", "#fbbf24"),
    swatch("Brown", "#92400e"),
    swatch("Gold", "#d97706"),
];

const WARM_AVOID: &[NamedColor] = &[
    swatch("Icy Blue", "#0ea5e9"),
    swatch("Pure White", "#ffffff"),
    swatch("Black", "#000000"),
    swatch("Silver", "#6b7280"),
];

const NEUTRAL_AVOID: &[NamedColor] = &[
    swatch("Neon Green", "#22c55e"),
    swatch("Hot Pink", "#ec4899"),
    swatch("Bright Orange", "#f97316"),
];

pub fn best_colors(undertone: Undertone) -> &'static [NamedColor] {
    match undertone {
        Undertone::Cool => COOL_BEST,
        Undertone::Warm => WARM_BEST,
        Undertone::Neutral => NEUTRAL_BEST,
    }
}

pub fn colors_to_avoid(undertone: Undertone) -> &'static [NamedColor] {
    match undertone {
        Undertone::Cool => COOL_AVOID,
        Undertone::Warm => WARM_AVOID,
        Undertone::Neutral => NEUTRAL_AVOID,
    }
}

/// Five accent colours for the season, tuned to the undertone.
pub fn seasonal_palette(season: Season, undertone: Undertone) -> [&'static str; 5] {
    use Season::*;
    use Undertone::*;
    match (season, undertone) {
        (Spring, Warm) => ["#ff6b35", "#f7931e", "#ffd700", "#9acd32", "#ff69b4"],
        (Spring, Cool) => ["#ff1493", "#00bfff", "#32cd32", "#ffd700", "#ff6347"],
        (Spring, Neutral) => ["#ff7f50", "#ffa500", "#ffff00", "#90ee90", "#ff69b4"],
        (Summer, Warm) => ["#ff4500", "#ff6347", "#ffd700", "#32cd32", "#ff1493"],
        (Summer, Cool) => ["#4169e1", "#00ced1", "#98fb98", "#ffb6c1", "#dda0dd"],
        (Summer, Neutral) => ["#ff7f50", "#40e0d0", "#98fb98", "#f0e68c", "#dda0dd"],
        (Fall, Warm) => ["#8b4513", "#d2691e", "#b8860b", "#228b22", "#dc143c"],
        (Fall, Cool) => ["#2f4f4f", "#708090", "#bc8f8f", "#cd853f", "#a0522d"],
        (Fall, Neutral) => ["#696969", "#a0522d", "#daa520", "#6b8e23", "#b22222"],
        (Winter, Warm) => ["#8b0000", "#ff4500", "#ffd700", "#006400", "#4b0082"],
        (Winter, Cool) => ["#000080", "#4682b4", "#2e8b57", "#dc143c", "#9400d3"],
        (Winter, Neutral) => ["#2f4f4f", "#800080", "#b22222", "#2e8b57", "#4682b4"],
    }
}

pub fn seasonal_tips(season: Season) -> [&'static str; 2] {
    match season {
        Season::Spring => [
            "Try lighter, fresher tones for spring",
            "Don't forget SPF as sun exposure increases",
        ],
        Season::Summer => [
            "Your skin may be slightly darker from sun exposure",
            "Use hydrating products in hot weather",
        ],
        Season::Fall => [
            "Consider warmer tones as your tan fades",
            "Switch to more moisturizing formulas",
        ],
        Season::Winter => [
            "Your skin may be lighter in winter months",
            "Use richer, more hydrating products",
        ],
    }
}

/// A foundation shade derived from the measured skin colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedShade {
    pub name: &'static str,
    pub description: &'static str,
    pub color: PixelSample,
}

fn shift(sample: PixelSample, by: i8) -> PixelSample {
    let channel = |c: u8| c.saturating_add_signed(by);
    PixelSample::new(channel(sample.r), channel(sample.g), channel(sample.b))
}

/// Exact match, one shade lighter (+15), one darker (-15) and a warmer
/// variation (red +10, blue -8). Channels saturate at 0 and 255.
pub fn shade_recommendations(sample: PixelSample) -> [NamedShade; 4] {
    [
        NamedShade {
            name: "Perfect Match",
            description: "Your exact skin tone",
            color: sample,
        },
        NamedShade {
            name: "One Shade Lighter",
            description: "For highlighting",
            color: shift(sample, 15),
        },
        NamedShade {
            name: "One Shade Darker",
            description: "For contouring",
            color: shift(sample, -15),
        },
        NamedShade {
            name: "Warm Variation",
            description: "Enhanced warmth",
            color: PixelSample::new(
                sample.r.saturating_add(10),
                sample.g,
                sample.b.saturating_sub(8),
            ),
        },
    ]
}

/// Swatches shown either side of the measured colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShadeRange {
    pub lighter: PixelSample,
    pub darker: PixelSample,
}

pub fn shade_range(sample: PixelSample) -> ShadeRange {
    ShadeRange {
        lighter: shift(sample, 25),
        darker: shift(sample, -25),
    }
}

/// What is in fashion for a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonalTrends {
    pub colors: [&'static str; 4],
    pub styles: &'static [&'static str],
    pub fabrics: [&'static str; 4],
}

pub fn seasonal_trends(season: Season) -> SeasonalTrends {
    match season {
        Season::Spring => SeasonalTrends {
            colors: ["Pastel pink", "Mint green", "Lavender", "Butter yellow"],
            styles: &["Flowy dresses", "Light layers", "Cropped jackets"],
            fabrics: ["Cotton", "Linen", "Chiffon", "Light knits"],
        },
        Season::Summer => SeasonalTrends {
            colors: ["Coral", "Turquoise", "Sunshine yellow", "Hot pink"],
            styles: &["Maxi dresses", "Shorts", "Tank tops", "Sandals"],
            fabrics: ["Cotton", "Linen", "Silk", "Breathable synthetics"],
        },
        Season::Fall => SeasonalTrends {
            colors: ["Rust orange", "Deep burgundy", "Forest green", "Camel"],
            styles: &["Layering", "Boots", "Sweaters", "Scarves"],
            fabrics: ["Wool", "Cashmere", "Velvet", "Leather"],
        },
        Season::Winter => SeasonalTrends {
            colors: ["Deep navy", "Rich purple", "Emerald green", "Classic black"],
            styles: &["Coats", "Turtlenecks", "Boots", "Heavy knits"],
            fabrics: ["Wool", "Cashmere", "Fur", "Heavy cotton"],
        },
    }
}
