use std::path::{Path, PathBuf};

use crate::{
    color::Rgba,
    foundation::{
        core::Point,
        error::{CoverError, CoverResult},
    },
    render::raster::Rasterizer,
    text::{builtin, wrap::MeasureText},
};

/// Font files tried, in order, when no explicit font is given.
///
/// CJK-capable faces come first so titles in any script render with real glyphs.
pub const FONT_CANDIDATES: &[&str] = &[
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    // Generic sans
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Pick the font file to use: an explicit path verbatim, else the first candidate on disk.
pub fn resolve_font_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_font_path_from(explicit, FONT_CANDIDATES)
}

/// [`resolve_font_path`] over a caller-supplied candidate list.
pub fn resolve_font_path_from(explicit: Option<&Path>, candidates: &[&str]) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Which face a [`TextEngine`] draws with.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FontFace {
    /// Outline font shaped with parley.
    Outline {
        /// Family name reported by the font.
        family: String,
    },
    /// Built-in 5x7 bitmap face.
    Builtin,
}

struct OutlineFace {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba>,
    family: String,
    font: vello_cpu::peniko::FontData,
}

impl OutlineFace {
    fn from_bytes(bytes: Vec<u8>) -> CoverResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| CoverError::font("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CoverError::font("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            font: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0),
        })
    }

    fn layout(&mut self, text: &str, font_size: f32) -> parley::Layout<Rgba> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font_size));
        let mut layout: parley::Layout<Rgba> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

enum Face {
    Outline(Box<OutlineFace>),
    Builtin,
}

/// Measures and draws single lines of text with one face.
pub struct TextEngine {
    face: Face,
}

impl TextEngine {
    /// Engine using the built-in bitmap face.
    pub fn builtin() -> Self {
        Self {
            face: Face::Builtin,
        }
    }

    /// Engine using an outline font parsed from `bytes`.
    pub fn from_font_bytes(bytes: Vec<u8>) -> CoverResult<Self> {
        Ok(Self {
            face: Face::Outline(Box::new(OutlineFace::from_bytes(bytes)?)),
        })
    }

    /// Load the font at `path`; a missing or unusable file falls back to the built-in face.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("no font file; using built-in face");
            return Self::builtin();
        };
        let loaded = std::fs::read(path)
            .map_err(|e| CoverError::font(format!("read {}: {e}", path.display())))
            .and_then(Self::from_font_bytes);
        match loaded {
            Ok(engine) => {
                tracing::debug!(path = %path.display(), face = ?engine.face(), "font loaded");
                engine
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "font unusable; using built-in face");
                Self::builtin()
            }
        }
    }

    /// Face in use.
    pub fn face(&self) -> FontFace {
        match &self.face {
            Face::Outline(o) => FontFace::Outline {
                family: o.family.clone(),
            },
            Face::Builtin => FontFace::Builtin,
        }
    }

    /// Draw one line with its top-left corner at `origin`.
    pub(crate) fn draw_line(
        &mut self,
        raster: &mut Rasterizer,
        text: &str,
        font_size: f32,
        origin: Point,
        color: Rgba,
    ) {
        match &mut self.face {
            Face::Builtin => {
                raster.fill_path(&builtin::text_path(text, font_size, origin), color);
            }
            Face::Outline(outline) => {
                let layout = outline.layout(text, font_size);
                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        raster.fill_glyphs(
                            &outline.font,
                            run.run().font_size(),
                            origin,
                            color,
                            glyphs,
                        );
                    }
                }
            }
        }
    }
}

impl MeasureText for TextEngine {
    fn measure(&mut self, text: &str, font_size: f32) -> (f64, f64) {
        match &mut self.face {
            Face::Builtin => builtin::measure(text, font_size),
            Face::Outline(outline) => {
                if text.is_empty() {
                    return (0.0, 0.0);
                }
                let layout = outline.layout(text, font_size);
                (f64::from(layout.width()), f64::from(layout.height()))
            }
        }
    }
}

impl std::fmt::Debug for TextEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEngine")
            .field("face", &self.face())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
