use image::GrayImage;

use crate::{
    color::Rgb,
    foundation::{
        core::{Affine, Point, Rect},
        error::CoverResult,
        math::hash_xy,
    },
    render::{Surface, composite, raster::Rasterizer, tone},
    seed::Rng64,
};

/// Largest rotation applied to the grain field, in degrees.
const MAX_TILT_DEG: f64 = 2.0;
const GRAIN_CONTRAST: f64 = 1.6;
const GRAIN_BRIGHTNESS: f64 = 0.6;

/// Standard deviation of the grain field for a given strength.
pub fn grain_sigma(strength: f64) -> f64 {
    20.0 + 60.0 * strength
}

/// Opacity of the screen blend for a given strength.
pub fn grain_opacity(strength: f64) -> f32 {
    (0.10 * strength).clamp(0.0, 0.25) as f32
}

/// Screen a slightly tilted Gaussian grain field over `base`.
#[tracing::instrument(level = "debug", skip(base, rng))]
pub fn apply(mut base: Surface, strength: f64, rng: &mut Rng64) -> CoverResult<Surface> {
    if strength <= 0.0 {
        return Ok(base);
    }

    let field_seed = rng.next_u64();
    let tilt_deg = rng.uniform(-MAX_TILT_DEG, MAX_TILT_DEG);

    let field = gaussian_field(base.width(), base.height(), field_seed, grain_sigma(strength));
    let mut grain = rotate_about_center(&field, tilt_deg)?;
    tone::contrast(&mut grain, GRAIN_CONTRAST);
    tone::brightness(&mut grain, GRAIN_BRIGHTNESS);

    composite::screen_in_place(&mut base, &Surface::from_gray(&grain)?, grain_opacity(strength))?;
    Ok(base)
}

/// Gray field centered at 128 with standard deviation `sigma`.
///
/// Every sample depends only on `(seed, x, y)`, so the field does not depend on iteration order.
pub fn gaussian_field(width: u32, height: u32, seed: u64, sigma: f64) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let v = 128.0 + sigma * standard_normal(hash_xy(seed, x, y));
        image::Luma([v.round().clamp(0.0, 255.0) as u8])
    })
}

// Box-Muller over the two 32-bit halves of one hash.
fn standard_normal(h: u64) -> f64 {
    const TWO_32: f64 = 4_294_967_296.0;
    let u1 = ((h >> 32) as f64 + 1.0) / TWO_32;
    let u2 = (h & 0xFFFF_FFFF) as f64 / TWO_32;
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

fn rotate_about_center(field: &GrayImage, degrees: f64) -> CoverResult<GrayImage> {
    let (w, h) = field.dimensions();
    let mut raster = Rasterizer::new(w, h)?;
    // Corners the rotated field leaves uncovered stay black.
    raster.fill_rect(
        Rect::new(0.0, 0.0, f64::from(w), f64::from(h)),
        Rgb::new(0, 0, 0).with_alpha(255),
    );
    let center = Point::new(f64::from(w) / 2.0, f64::from(h) / 2.0);
    raster.draw_surface(
        &Surface::from_gray(field)?,
        Affine::rotate_about(degrees.to_radians(), center),
    )?;
    Ok(raster.finish()?.to_gray())
}

#[cfg(test)]
#[path = "../../tests/unit/layers/noise.rs"]
mod tests;
