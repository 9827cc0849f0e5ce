//! Palette synthesis from the seeded stream.

use crate::{
    color::{Rgb, hsl_to_rgb},
    seed::Rng64,
    style::{Theme, Variant},
};

/// The four colors used throughout one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Palette {
    /// Gradient start (top of the vertical ramp).
    pub c1: Rgb,
    /// Gradient end (bottom of the vertical ramp).
    pub c2: Rgb,
    /// Roughly complementary accent.
    pub accent: Rgb,
    /// Title text color.
    pub text: Rgb,
}

const DARK_THEME_TEXT: Rgb = Rgb::new(245, 247, 250);
const LIGHT_THEME_TEXT: Rgb = Rgb::new(22, 24, 28);

impl Palette {
    /// Draw a palette. Theme picks lightness, variant picks hue band and saturation.
    ///
    /// Consumes a fixed number of draws for a given `(theme, variant)`, so layers drawn after it
    /// see the same stream regardless of the colors chosen.
    pub fn synthesize(rng: &mut Rng64, theme: Theme, variant: Variant) -> Self {
        let base_h = match variant {
            Variant::Warm => rng.uniform(0.03, 0.14),
            _ => rng.next_f64(),
        };

        let (l1, l2, text) = match theme {
            Theme::Light => (
                rng.uniform(0.78, 0.86),
                rng.uniform(0.86, 0.93),
                LIGHT_THEME_TEXT,
            ),
            Theme::Dark => (
                rng.uniform(0.18, 0.28),
                rng.uniform(0.30, 0.42),
                DARK_THEME_TEXT,
            ),
        };

        let (s1, s2, sa) = match variant {
            Variant::Mono => (
                rng.uniform(0.06, 0.16),
                rng.uniform(0.08, 0.20),
                rng.uniform(0.10, 0.25),
            ),
            Variant::Neon => (
                rng.uniform(0.70, 0.92),
                rng.uniform(0.70, 0.92),
                rng.uniform(0.85, 0.98),
            ),
            Variant::Default | Variant::Warm => (
                rng.uniform(0.55, 0.85),
                rng.uniform(0.55, 0.85),
                rng.uniform(0.70, 0.95),
            ),
        };

        let c1 = hsl_to_rgb(base_h.rem_euclid(1.0), s1, l1);
        let c2 = hsl_to_rgb((base_h + rng.uniform(0.08, 0.22)).rem_euclid(1.0), s2, l2);

        let mut accent_l = match theme {
            Theme::Dark => rng.uniform(0.52, 0.66),
            Theme::Light => rng.uniform(0.40, 0.55),
        };
        if variant == Variant::Neon && theme == Theme::Dark {
            accent_l = rng.uniform(0.60, 0.74);
        }
        let accent = hsl_to_rgb((base_h + rng.uniform(0.45, 0.65)).rem_euclid(1.0), sa, accent_l);

        Self {
            c1,
            c2,
            accent,
            text,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/palette.rs"]
mod tests;
