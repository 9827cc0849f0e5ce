//! CPU surface operations shared by every layer.
//!
//! Surfaces are premultiplied RGBA8, row-major. Vector geometry and glyphs go through
//! `vello_cpu`; blending, blurring and tone adjustments are exact integer or f32 kernels here.

/// Gaussian blur.
pub mod blur;
/// Blending kernels.
pub mod composite;
pub(crate) mod raster;
/// Owned pixel buffers.
pub mod surface;
/// Grayscale tone curves.
pub mod tone;

pub use surface::Surface;
