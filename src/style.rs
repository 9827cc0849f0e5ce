//! Named style presets and caller overrides.

use serde::{Deserialize, Serialize};

/// Overall light/dark polarity of a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background, near-white text.
    Dark,
    /// Light background, near-black text.
    Light,
}

impl Theme {
    /// Lowercase name as shown in listings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Hue/saturation family of the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Any hue, moderate saturation.
    Default,
    /// Any hue, very high saturation.
    Neon,
    /// Orange band hues.
    Warm,
    /// Very low saturation.
    Mono,
}

/// Horizontal placement of the text block and of each line within it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Flush to the left margin.
    #[default]
    Left,
    /// Centered in the canvas.
    Center,
    /// Flush to the right margin.
    Right,
}

impl Align {
    /// Parse an alignment name; anything unrecognized falls back to [`Align::Left`].
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" => Self::Center,
            "right" => Self::Right,
            _ => Self::Left,
        }
    }
}

/// Immutable preset configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StyleSpec {
    /// Light/dark polarity.
    pub theme: Theme,
    /// Palette family.
    pub variant: Variant,
    /// Grain strength, nominally `0..=2`.
    pub noise: f64,
    /// Shape density, nominally `0..=2`.
    pub shapes: f64,
    /// Vignette strength, nominally `0..=2`.
    pub vignette: f64,
    /// Text alignment.
    pub align: Align,
    /// Margin as a fraction of the shorter canvas side.
    pub margin: f64,
    /// Human-readable summary for listings.
    pub description: &'static str,
}

/// A registry entry.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StylePreset {
    /// Registry key.
    pub name: &'static str,
    /// Preset values.
    #[serde(flatten)]
    pub spec: StyleSpec,
}

/// Name of the preset used when nothing else is requested.
pub const DEFAULT_STYLE: &str = "default";

/// Lower/upper bounds for layer strengths.
pub const STRENGTH_RANGE: (f64, f64) = (0.0, 2.0);
/// Lower/upper bounds for the margin ratio.
pub const MARGIN_RANGE: (f64, f64) = (0.04, 0.12);

#[allow(clippy::too_many_arguments)]
const fn preset(
    name: &'static str,
    theme: Theme,
    variant: Variant,
    noise: f64,
    shapes: f64,
    vignette: f64,
    margin: f64,
    description: &'static str,
) -> StylePreset {
    StylePreset {
        name,
        spec: StyleSpec {
            theme,
            variant,
            noise,
            shapes,
            vignette,
            align: Align::Left,
            margin,
            description,
        },
    }
}

const DEFAULT_PRESET: StylePreset = preset(
    "default",
    Theme::Dark,
    Variant::Default,
    1.0,
    1.0,
    1.0,
    0.07,
    "Deep gradient + balanced grain + mixed geometric shapes.",
);

/// Spec used when a name is not in the registry.
static DEFAULT_SPEC: StyleSpec = DEFAULT_PRESET.spec;

// Sorted by name.
static PRESETS: [StylePreset; 8] = [
    DEFAULT_PRESET,
    preset(
        "geometric",
        Theme::Dark,
        Variant::Default,
        0.8,
        1.8,
        1.0,
        0.07,
        "More polygons/stripes/circles; punchy tech vibe.",
    ),
    preset(
        "light",
        Theme::Light,
        Variant::Default,
        0.6,
        0.9,
        0.3,
        0.07,
        "Light background with dark text; works well for print-like pages.",
    ),
    preset(
        "minimal",
        Theme::Dark,
        Variant::Default,
        0.6,
        0.2,
        0.9,
        0.08,
        "Cleaner, fewer shapes; good for long titles.",
    ),
    preset(
        "mono",
        Theme::Dark,
        Variant::Mono,
        1.0,
        1.1,
        1.2,
        0.07,
        "Low-saturation palette; subtle and calm.",
    ),
    preset(
        "neon",
        Theme::Dark,
        Variant::Neon,
        0.9,
        1.4,
        1.1,
        0.07,
        "Higher-contrast palette with vivid accents.",
    ),
    preset(
        "paper",
        Theme::Light,
        Variant::Warm,
        1.4,
        0.3,
        0.2,
        0.08,
        "Paper-like warm light background with stronger grain.",
    ),
    preset(
        "warm",
        Theme::Dark,
        Variant::Warm,
        1.1,
        1.0,
        1.1,
        0.07,
        "Warm, earthy hues; good for essays/notes.",
    ),
];

/// All presets in name order.
pub fn presets() -> &'static [StylePreset] {
    &PRESETS
}

/// Registry keys in name order.
pub fn style_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.name)
}

/// Look up a preset by exact name.
pub fn lookup(name: &str) -> Option<&'static StyleSpec> {
    PRESETS.iter().find(|p| p.name == name).map(|p| &p.spec)
}

/// Look up a preset, falling back to `default` for unknown names.
pub fn lookup_or_default(name: &str) -> &'static StyleSpec {
    match lookup(name) {
        Some(spec) => spec,
        None => {
            tracing::warn!(style = name, "unknown style; using 'default'");
            lookup(DEFAULT_STYLE).unwrap_or(&DEFAULT_SPEC)
        }
    }
}

/// Caller-supplied replacements for individual preset values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    /// Grain strength override.
    pub noise: Option<f64>,
    /// Shape density override.
    pub shapes: Option<f64>,
    /// Vignette strength override.
    pub vignette: Option<f64>,
    /// Alignment override.
    pub align: Option<Align>,
    /// Margin ratio override.
    pub margin: Option<f64>,
}

/// Values actually used by a render after overrides and clamping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LayerParams {
    /// Light/dark polarity.
    pub theme: Theme,
    /// Palette family.
    pub variant: Variant,
    /// Grain strength in `0..=2`.
    pub noise: f64,
    /// Shape density in `0..=2`.
    pub shapes: f64,
    /// Vignette strength in `0..=2`.
    pub vignette: f64,
    /// Text alignment.
    pub align: Align,
    /// Margin ratio in `0.04..=0.12`.
    pub margin: f64,
}

impl StyleSpec {
    /// Apply `overrides` on top of this preset. Every strength and the margin are clamped into
    /// range, whether they came from the preset or the caller.
    pub fn resolve(&self, overrides: &StyleOverrides) -> LayerParams {
        LayerParams {
            theme: self.theme,
            variant: self.variant,
            noise: clamp_strength(overrides.noise.unwrap_or(self.noise)),
            shapes: clamp_strength(overrides.shapes.unwrap_or(self.shapes)),
            vignette: clamp_strength(overrides.vignette.unwrap_or(self.vignette)),
            align: overrides.align.unwrap_or(self.align),
            margin: clamp_margin(overrides.margin.unwrap_or(self.margin)),
        }
    }
}

/// Clamp a layer strength into `0..=2`; NaN maps to 0.
pub fn clamp_strength(v: f64) -> f64 {
    clamp_or(v, STRENGTH_RANGE, STRENGTH_RANGE.0)
}

/// Clamp a margin ratio into `0.04..=0.12`; NaN maps to the lower bound.
pub fn clamp_margin(v: f64) -> f64 {
    clamp_or(v, MARGIN_RANGE, MARGIN_RANGE.0)
}

fn clamp_or(v: f64, (lo, hi): (f64, f64), nan: f64) -> f64 {
    if v.is_nan() { nan } else { v.clamp(lo, hi) }
}

#[cfg(test)]
#[path = "../tests/unit/style.rs"]
mod tests;
