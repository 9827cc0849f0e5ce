use std::str::FromStr;

use crate::foundation::error::{CoverError, CoverResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Smallest accepted width.
    pub const MIN_WIDTH: u32 = 320;
    /// Smallest accepted height.
    pub const MIN_HEIGHT: u32 = 200;
    /// Rasterizer surfaces are addressed with 16-bit dimensions.
    pub const MAX_SIDE: u32 = u16::MAX as u32;

    /// Validate and build a canvas size.
    pub fn new(width: u32, height: u32) -> CoverResult<Self> {
        if width < Self::MIN_WIDTH || height < Self::MIN_HEIGHT {
            return Err(CoverError::validation("size too small; try >= 320x200"));
        }
        if width > Self::MAX_SIDE || height > Self::MAX_SIDE {
            return Err(CoverError::validation(format!(
                "size too large; each side must be <= {}",
                Self::MAX_SIDE
            )));
        }
        Ok(Self { width, height })
    }

    /// Parse a `"<width>x<height>"` string such as `"1920x1080"`.
    pub fn parse(s: &str) -> CoverResult<Self> {
        let malformed = || CoverError::validation("size must be like 1920x1080");
        let (w, h) = s.trim().split_once('x').ok_or_else(malformed)?;
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(w) || !digits(h) {
            return Err(malformed());
        }
        let w: u32 = w.parse().map_err(|_| malformed())?;
        let h: u32 = h.parse().map_err(|_| malformed())?;
        Self::new(w, h)
    }

    /// The shorter of the two sides; most proportions scale from it.
    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
        }
    }
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for CanvasSize {
    type Err = CoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CanvasSize {
    type Error = CoverError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CanvasSize> for String {
    fn from(value: CanvasSize) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
