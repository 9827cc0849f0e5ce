//! Separable Gaussian blur with a Q16 fixed-point kernel.

use image::GrayImage;

use crate::{
    foundation::error::{CoverError, CoverResult},
    render::Surface,
};

/// Kernel radius covering three standard deviations.
pub fn radius_for_sigma(sigma: f32) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (sigma * 3.0).ceil() as u32
}

/// Blur a premultiplied surface; edges clamp.
pub fn blur_surface(src: &Surface, sigma: f32) -> CoverResult<Surface> {
    let radius = radius_for_sigma(sigma);
    let data = blur_channels(src.data(), src.width(), src.height(), 4, radius, sigma)?;
    Surface::from_premul_bytes(src.width(), src.height(), data)
}

/// Blur a single-channel mask; edges clamp.
pub fn blur_gray(src: &GrayImage, sigma: f32) -> CoverResult<GrayImage> {
    let (w, h) = src.dimensions();
    let radius = radius_for_sigma(sigma);
    let data = blur_channels(src.as_raw(), w, h, 1, radius, sigma)?;
    GrayImage::from_raw(w, h, data).ok_or_else(|| CoverError::render("blurred mask size mismatch"))
}

fn blur_channels(
    src: &[u8],
    width: u32,
    height: u32,
    channels: usize,
    radius: u32,
    sigma: f32,
) -> CoverResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| CoverError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(CoverError::render(
            "blur expects src matching width*height*channels",
        ));
    }
    if radius == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    let dims = Dims {
        width: width as usize,
        height: height as usize,
        channels,
    };
    horizontal_pass(src, &mut tmp, dims, &kernel);
    vertical_pass(&tmp, &mut out, dims, &kernel);
    Ok(out)
}

#[derive(Clone, Copy)]
struct Dims {
    width: usize,
    height: usize,
    channels: usize,
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> CoverResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(CoverError::render("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = f64::from(i);
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(CoverError::render("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    // Push the rounding residue into the center tap so the kernel sums to exactly 1.0.
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], dims: Dims, k: &[u32]) {
    let radius = (k.len() / 2) as isize;
    let Dims {
        width: w,
        height: h,
        channels: ch,
    } = dims;
    let mut acc = vec![0u64; ch];
    for y in 0..h {
        let row = y * w;
        for x in 0..w {
            acc.iter_mut().for_each(|a| *a = 0);
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x as isize + ki as isize - radius).clamp(0, w as isize - 1) as usize;
                let idx = (row + sx) * ch;
                for (c, a) in acc.iter_mut().enumerate() {
                    *a += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = (row + x) * ch;
            for (c, &a) in acc.iter().enumerate() {
                dst[out_idx + c] = q16_to_u8(a);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], dims: Dims, k: &[u32]) {
    let radius = (k.len() / 2) as isize;
    let Dims {
        width: w,
        height: h,
        channels: ch,
    } = dims;
    let mut acc = vec![0u64; ch];
    for y in 0..h {
        for x in 0..w {
            acc.iter_mut().for_each(|a| *a = 0);
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y as isize + ki as isize - radius).clamp(0, h as isize - 1) as usize;
                let idx = (sy * w + x) * ch;
                for (c, a) in acc.iter_mut().enumerate() {
                    *a += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = (y * w + x) * ch;
            for (c, &a) in acc.iter().enumerate() {
                dst[out_idx + c] = q16_to_u8(a);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
