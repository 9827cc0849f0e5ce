//! Single entry point chaining seed, palette, layers and text into one image.

use std::path::PathBuf;

use image::RgbImage;

use crate::{
    foundation::{core::CanvasSize, error::CoverResult},
    layers::{VignetteMask, gradient, noise, shapes, vignette},
    palette::Palette,
    render::composite,
    seed::{Rng64, derive_seed},
    style::{self, DEFAULT_STYLE, LayerParams, StyleOverrides},
    text::{FontFace, TextBlockMetrics, TextEngine, draw_block, measure_block},
};

/// Everything a render depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderRequest {
    /// Title; also the seed source. A blank title renders the background only.
    pub text: String,
    /// Optional smaller line under the title.
    pub subtitle: Option<String>,
    /// Output size.
    pub size: CanvasSize,
    /// Preset name; unknown names fall back to `default`.
    pub style: String,
    /// Explicit seed, replacing the one derived from text and style.
    pub seed: Option<u64>,
    /// Outline font file; `None` uses the built-in face.
    pub font_path: Option<PathBuf>,
    /// Per-render replacements for preset values.
    pub overrides: StyleOverrides,
    /// Vignette mask shape.
    pub vignette_mask: VignetteMask,
}

impl RenderRequest {
    /// Request for `text` with the default style and size.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subtitle: None,
            size: CanvasSize::default(),
            style: DEFAULT_STYLE.to_string(),
            seed: None,
            font_path: None,
            overrides: StyleOverrides::default(),
            vignette_mask: VignetteMask::default(),
        }
    }
}

/// Observable summary of one render.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderReport {
    /// Seed the stream was started from.
    pub seed: u64,
    /// Preset actually used.
    pub style: String,
    /// Colors drawn for this render.
    pub palette: Palette,
    /// Resolved, clamped layer parameters.
    pub params: LayerParams,
    /// Vignette mask shape used.
    pub vignette_mask: VignetteMask,
    /// Number of shapes scattered.
    pub shape_count: usize,
    /// Face used for text; `None` when no text was drawn.
    pub font: Option<FontFace>,
    /// Text block geometry; `None` when the title was blank.
    pub text: Option<TextBlockMetrics>,
}

/// A finished cover.
#[derive(Clone, Debug)]
pub struct RenderedCover {
    /// Opaque RGB pixels.
    pub image: RgbImage,
    /// What went into them.
    pub report: RenderReport,
}

/// Render one cover. Identical requests produce identical pixels.
#[tracing::instrument(skip(req), fields(size = %req.size, style = %req.style))]
pub fn render_cover(req: &RenderRequest) -> CoverResult<RenderedCover> {
    let spec = style::lookup_or_default(&req.style);
    let style_name = if style::lookup(&req.style).is_some() {
        req.style.clone()
    } else {
        DEFAULT_STYLE.to_string()
    };
    let params = spec.resolve(&req.overrides);

    let seed = derive_seed(&req.text, &style_name, req.seed);
    let mut rng = Rng64::new(seed);
    let palette = Palette::synthesize(&mut rng, params.theme, params.variant);
    tracing::debug!(seed, ?palette, "palette drawn");

    let surface = gradient::paint(req.size, &palette)?;
    let surface = noise::apply(surface, params.noise, &mut rng)?;
    let (surface, shape_count) = shapes::apply(surface, &palette, params.shapes, &mut rng)?;
    let mut surface = vignette::apply(surface, params.vignette, req.vignette_mask)?;

    let title = req.text.trim();
    let (font, text) = if title.is_empty() {
        tracing::debug!("blank title; skipping text layer");
        (None, None)
    } else {
        let mut engine = TextEngine::load(req.font_path.as_deref());
        let metrics = measure_block(
            &mut engine,
            req.size,
            title,
            req.subtitle.as_deref(),
            params.margin,
            params.align,
        );
        let layer = draw_block(&mut engine, req.size, &metrics, &palette, params.theme)?;
        composite::over_in_place(&mut surface, &layer, 1.0)?;
        (Some(engine.face()), Some(metrics))
    };

    Ok(RenderedCover {
        image: surface.to_rgb_image(),
        report: RenderReport {
            seed,
            style: style_name,
            palette,
            params,
            vignette_mask: req.vignette_mask,
            shape_count,
            font,
            text,
        },
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
