//! Premultiplied compositing kernels.

use image::GrayImage;

use crate::{
    foundation::{
        error::{CoverError, CoverResult},
        math::{add_sat_u8, mul_div255_u8, opacity_u8},
    },
    render::Surface,
};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over of a single premultiplied pixel, with the source scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let op = opacity_u8(opacity);
    if op == 0 || src[3] == 0 {
        return dst;
    }

    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Source-over `src` onto `dst` in place.
pub fn over_in_place(dst: &mut Surface, src: &Surface, opacity: f32) -> CoverResult<()> {
    check_same_size(dst, src, "over_in_place")?;
    if opacity_u8(opacity) == 0 {
        return Ok(());
    }
    for (d, s) in dst.data_mut().chunks_exact_mut(4).zip(src.data().chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Screen-blend `src` onto `dst` in place (`s + d - s*d` on straight colors).
pub fn screen_in_place(dst: &mut Surface, src: &Surface, opacity: f32) -> CoverResult<()> {
    check_same_size(dst, src, "screen_in_place")?;
    blend_in_place(dst.data_mut(), src.data(), opacity, |s, d| s + d - s * d);
    Ok(())
}

/// Scale every channel of `src` by the mask value at the same pixel.
pub fn apply_mask(src: &Surface, mask: &GrayImage) -> CoverResult<Surface> {
    if mask.dimensions() != (src.width(), src.height()) {
        return Err(CoverError::render(
            "apply_mask expects a mask matching the surface size",
        ));
    }
    let mut out = src.clone();
    for (d, &m) in out.data_mut().chunks_exact_mut(4).zip(mask.as_raw()) {
        let w = u16::from(m);
        for c in d.iter_mut() {
            *c = mul_div255_u8(u16::from(*c), w);
        }
    }
    Ok(out)
}

/// Darken `dst` toward black where `mask` is bright.
pub fn darken_through_mask(dst: &mut Surface, mask: &GrayImage, opacity: f32) -> CoverResult<()> {
    let black = Surface::filled(dst.width(), dst.height(), crate::color::Rgb::new(0, 0, 0))?;
    let masked = apply_mask(&black, mask)?;
    over_in_place(dst, &masked, opacity)
}

fn check_same_size(dst: &Surface, src: &Surface, what: &str) -> CoverResult<()> {
    if dst.width() != src.width() || dst.height() != src.height() {
        return Err(CoverError::render(format!(
            "{what} expects equally sized surfaces"
        )));
    }
    Ok(())
}

// Source-over with the blend applied to unpremultiplied channels:
// out_a = sa + da * (1 - sa)
// out_p = sp * (1 - da) + dp * (1 - sa) + B(sc, dc) * sa * da
#[inline(always)]
fn blend_in_place<F>(dst: &mut [u8], src: &[u8], opacity: f32, blend_fn: F)
where
    F: Fn(f32, f32) -> f32,
{
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = (f32::from(s[3]) / 255.0) * opacity;
        if sa <= 0.0 {
            continue;
        }
        let da = f32::from(d[3]) / 255.0;
        let out_a = (sa + da * (1.0 - sa)).clamp(0.0, 1.0);

        for c in 0..3 {
            let sp = (f32::from(s[c]) / 255.0) * opacity;
            let dp = f32::from(d[c]) / 255.0;
            let sc = (sp / sa).clamp(0.0, 1.0);
            let dc = if da > 0.0 { (dp / da).clamp(0.0, 1.0) } else { 0.0 };
            let b = blend_fn(sc, dc).clamp(0.0, 1.0);
            let out = (sp * (1.0 - da) + dp * (1.0 - sa) + b * sa * da).clamp(0.0, 1.0);
            d[c] = (out * 255.0).round() as u8;
        }
        d[3] = (out_a * 255.0).round() as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
