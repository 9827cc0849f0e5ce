//! Grayscale tone adjustments used on grain fields and vignette masks.

use image::GrayImage;

/// Invert every sample (`255 - v`).
pub fn invert(img: &mut GrayImage) {
    image::imageops::invert(img);
}

/// Stretch samples away from the image mean by `factor`.
///
/// The mean is rounded to an integer first, so a flat image is a fixed point for any factor.
pub fn contrast(img: &mut GrayImage, factor: f64) {
    let raw = img.as_raw();
    if raw.is_empty() {
        return;
    }
    let sum: u64 = raw.iter().map(|&v| u64::from(v)).sum();
    let mean = (sum as f64 / raw.len() as f64).round();
    let lut = build_lut(|v| mean + (v - mean) * factor);
    apply_lut(img, &lut);
}

/// Scale every sample by `factor` toward black.
pub fn brightness(img: &mut GrayImage, factor: f64) {
    let lut = build_lut(|v| v * factor);
    apply_lut(img, &lut);
}

fn build_lut(f: impl Fn(f64) -> f64) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, slot) in lut.iter_mut().enumerate() {
        *slot = f(i as f64).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

fn apply_lut(img: &mut GrayImage, lut: &[u8; 256]) {
    for p in img.pixels_mut() {
        p.0[0] = lut[usize::from(p.0[0])];
    }
}
