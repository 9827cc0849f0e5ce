use crate::{
    color::{Rgb, mix},
    foundation::{core::CanvasSize, error::CoverResult},
    palette::Palette,
    render::Surface,
};

/// Weight of the horizontal ramp in the final blend.
const HORIZONTAL_WEIGHT: f64 = 0.30;

/// Opaque base: a c1→c2 vertical ramp blended with a c2→c1 horizontal ramp.
#[tracing::instrument(level = "debug", skip(palette))]
pub fn paint(size: CanvasSize, palette: &Palette) -> CoverResult<Surface> {
    let (w, h) = (size.width, size.height);
    let rows: Vec<Rgb> = (0..h)
        .map(|y| mix(palette.c1, palette.c2, ramp_t(y, h)))
        .collect();
    let cols: Vec<Rgb> = (0..w)
        .map(|x| mix(palette.c2, palette.c1, ramp_t(x, w)))
        .collect();

    let mut surface = Surface::transparent(w, h)?;
    let data = surface.data_mut();
    for (y, &vert) in rows.iter().enumerate() {
        let row = &mut data[y * (w as usize) * 4..(y + 1) * (w as usize) * 4];
        for (px, &horiz) in row.chunks_exact_mut(4).zip(&cols) {
            let c = mix(vert, horiz, HORIZONTAL_WEIGHT);
            px.copy_from_slice(&[c.r, c.g, c.b, 255]);
        }
    }
    Ok(surface)
}

fn ramp_t(i: u32, n: u32) -> f64 {
    f64::from(i) / f64::from(n.saturating_sub(1).max(1))
}

#[cfg(test)]
#[path = "../../tests/unit/layers/gradient.rs"]
mod tests;
