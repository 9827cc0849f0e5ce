use image::{GrayImage, imageops::FilterType};

use crate::{
    foundation::{
        core::CanvasSize,
        error::{CoverError, CoverResult},
    },
    render::{Surface, blur, composite, tone},
};

const RAMP_SIDE: u32 = 256;
const MASK_CONTRAST: f64 = 1.35;
const MASK_BRIGHTNESS: f64 = 0.75;
/// Soft-rect masks are built at this shorter side, then scaled up.
const SOFT_RECT_WORK_SIDE: u32 = 160;

/// Shape of the center-bright mask the vignette darkens through (inverted).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum VignetteMask {
    /// Elliptical radial ramp: 255 at the center, 0 on the inscribed ellipse and beyond.
    #[default]
    Radial,
    /// Inset rectangle blurred by a wide Gaussian.
    SoftRect,
}

impl VignetteMask {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Radial => "radial",
            Self::SoftRect => "soft-rect",
        }
    }
}

impl std::str::FromStr for VignetteMask {
    type Err = CoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "radial" => Ok(Self::Radial),
            "soft-rect" | "softrect" | "rect" => Ok(Self::SoftRect),
            other => Err(CoverError::validation(format!(
                "unknown vignette mask '{other}' (expected radial or soft-rect)"
            ))),
        }
    }
}

/// Opacity of the darkening layer for a given strength.
pub fn vignette_opacity(strength: f64) -> f32 {
    (0.35 * strength).clamp(0.0, 0.55) as f32
}

/// Center-bright mask sized to the canvas.
pub fn center_mask(size: CanvasSize, kind: VignetteMask) -> CoverResult<GrayImage> {
    match kind {
        VignetteMask::Radial => Ok(radial_mask(size)),
        VignetteMask::SoftRect => soft_rect_mask(size),
    }
}

/// Darken the edges of `base`. No random draws.
#[tracing::instrument(level = "debug", skip(base))]
pub fn apply(mut base: Surface, strength: f64, kind: VignetteMask) -> CoverResult<Surface> {
    if strength <= 0.0 {
        return Ok(base);
    }
    let size = CanvasSize {
        width: base.width(),
        height: base.height(),
    };
    let mut mask = center_mask(size, kind)?;
    tone::invert(&mut mask);
    tone::contrast(&mut mask, MASK_CONTRAST);
    tone::brightness(&mut mask, MASK_BRIGHTNESS);

    composite::darken_through_mask(&mut base, &mask, vignette_opacity(strength))?;
    Ok(base)
}

fn radial_mask(size: CanvasSize) -> GrayImage {
    let half = f64::from(RAMP_SIDE) / 2.0;
    let ramp = GrayImage::from_fn(RAMP_SIDE, RAMP_SIDE, |x, y| {
        let dx = (f64::from(x) + 0.5 - half) / half;
        let dy = (f64::from(y) + 0.5 - half) / half;
        let d = (dx * dx + dy * dy).sqrt();
        image::Luma([(255.0 * (1.0 - d)).round().clamp(0.0, 255.0) as u8])
    });
    image::imageops::resize(&ramp, size.width, size.height, FilterType::Triangle)
}

fn soft_rect_mask(size: CanvasSize) -> CoverResult<GrayImage> {
    let scale = (f64::from(SOFT_RECT_WORK_SIDE) / f64::from(size.min_side())).min(1.0);
    let w = ((f64::from(size.width) * scale).round() as u32).max(1);
    let h = ((f64::from(size.height) * scale).round() as u32).max(1);
    let min = f64::from(w.min(h));

    let inset = (min * 0.12).floor() as u32;
    let mut mask = GrayImage::from_fn(w, h, |x, y| {
        let inside = x >= inset && y >= inset && x < w - inset && y < h - inset;
        image::Luma([if inside { 255 } else { 0 }])
    });
    mask = blur::blur_gray(&mask, (min * 0.15) as f32)?;
    Ok(image::imageops::resize(
        &mask,
        size.width,
        size.height,
        FilterType::Triangle,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/layers/vignette.rs"]
mod tests;
