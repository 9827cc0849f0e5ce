use image::{GrayImage, RgbImage};

use crate::{
    color::Rgb,
    foundation::error::{CoverError, CoverResult},
};

/// Owned premultiplied RGBA8 pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Fully transparent surface.
    pub fn transparent(width: u32, height: u32) -> CoverResult<Self> {
        let len = buffer_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Opaque surface filled with one color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> CoverResult<Self> {
        let len = buffer_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..(len / 4) {
            data.extend_from_slice(&[color.r, color.g, color.b, 255]);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing premultiplied buffer.
    pub fn from_premul_bytes(width: u32, height: u32, data: Vec<u8>) -> CoverResult<Self> {
        if data.len() != buffer_len(width, height)? {
            return Err(CoverError::render(
                "surface bytes must match width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Opaque gray surface with the luminance replicated into every channel.
    pub fn from_gray(gray: &GrayImage) -> CoverResult<Self> {
        let (width, height) = gray.dimensions();
        let mut data = Vec::with_capacity(buffer_len(width, height)?);
        for &v in gray.as_raw() {
            data.extend_from_slice(&[v, v, v, 255]);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable premultiplied RGBA8 bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Premultiplied pixel at `(x, y)`; `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Red channel as a grayscale image; meaningful for surfaces built by [`Surface::from_gray`].
    pub fn to_gray(&self) -> GrayImage {
        let raw = self.data.chunks_exact(4).map(|px| px[0]).collect();
        GrayImage::from_raw(self.width, self.height, raw)
            .unwrap_or_else(|| GrayImage::new(self.width, self.height))
    }

    /// Flatten onto black and drop alpha.
    ///
    /// Premultiplied channels already equal the color composited over black.
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut raw = Vec::with_capacity(self.data.len() / 4 * 3);
        for px in self.data.chunks_exact(4) {
            raw.extend_from_slice(&px[..3]);
        }
        RgbImage::from_raw(self.width, self.height, raw)
            .unwrap_or_else(|| RgbImage::new(self.width, self.height))
    }

    pub(crate) fn to_pixmap(&self) -> CoverResult<vello_cpu::Pixmap> {
        let w = dim_u16(self.width, "width")?;
        let h = dim_u16(self.height, "height")?;

        let mut may_have_opacities = false;
        let mut pixels = Vec::with_capacity(self.data.len() / 4);
        for px in self.data.chunks_exact(4) {
            may_have_opacities |= px[3] != 255;
            pixels.push(vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            });
        }
        Ok(vello_cpu::Pixmap::from_parts_with_opacity(
            pixels,
            w,
            h,
            may_have_opacities,
        ))
    }

    pub(crate) fn from_pixmap(pixmap: &vello_cpu::Pixmap) -> CoverResult<Self> {
        Self::from_premul_bytes(
            u32::from(pixmap.width()),
            u32::from(pixmap.height()),
            pixmap.data_as_u8_slice().to_vec(),
        )
    }
}

pub(crate) fn dim_u16(v: u32, what: &str) -> CoverResult<u16> {
    u16::try_from(v).map_err(|_| CoverError::render(format!("surface {what} exceeds u16")))
}

fn buffer_len(width: u32, height: u32) -> CoverResult<usize> {
    if width == 0 || height == 0 {
        return Err(CoverError::render("surface dimensions must be non-zero"));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| CoverError::render("surface buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
