//! covergen renders deterministic procedural cover art from a title string.
//!
//! A render is a fixed chain over one premultiplied RGBA surface:
//!
//! - derive a seed from the title and style (or take an explicit one)
//! - draw a palette from the seeded stream
//! - paint a gradient, then add grain, scattered shapes and a vignette
//! - wrap and place the title block on a legibility scrim
//!
//! [`render_cover`] is the entry point; the same [`RenderRequest`] always yields the same pixels.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Parallel rendering from a JSON manifest.
pub mod batch;
/// 8-bit color math.
pub mod color;
mod foundation;
/// Procedural layers.
pub mod layers;
/// Output naming and encoding.
pub mod output;
/// Palette synthesis.
pub mod palette;
/// Render entry point.
pub mod pipeline;
/// Surface operations.
pub mod render;
/// Seed derivation and the seeded stream.
pub mod seed;
/// Style presets and overrides.
pub mod style;
/// Text faces and layout.
pub mod text;

pub use crate::foundation::core::CanvasSize;
pub use crate::foundation::error::{CoverError, CoverResult};

pub use crate::batch::{BatchJob, BatchManifest, JobOutcome, run_batch};
pub use crate::color::{Rgb, Rgba};
pub use crate::layers::VignetteMask;
pub use crate::output::{default_output_path, safe_filename_stem, save_cover};
pub use crate::palette::Palette;
pub use crate::pipeline::{RenderReport, RenderRequest, RenderedCover, render_cover};
pub use crate::seed::{Rng64, derive_seed};
pub use crate::style::{Align, LayerParams, StyleOverrides, StyleSpec, Theme, Variant};
pub use crate::text::{FontFace, TextBlockMetrics, WrapMode, resolve_font_path};
