//! Text faces, wrapping and title-block layout.

pub mod builtin;
/// Font discovery and the line engine.
pub mod font;
pub mod layout;
pub mod wrap;

pub use font::{FontFace, TextEngine, resolve_font_path};
pub use layout::{LineMetrics, TextBlockMetrics, draw_block, measure_block};
pub use wrap::{MeasureText, WrapMode, WrappedText, collapse_whitespace, wrap_text};
