//! Procedural layers, applied in order: gradient, noise, shapes, vignette.
//!
//! Each layer takes ownership of the surface and hands it back, so the pipeline reads as a
//! chain of transforms. A strength of zero or less leaves the surface untouched and draws
//! nothing from the random stream.

/// Two-axis color ramp.
pub mod gradient;
/// Film grain.
pub mod noise;
/// Scattered translucent accents.
pub mod shapes;
/// Edge darkening.
pub mod vignette;

pub use shapes::Shape;
pub use vignette::VignetteMask;
