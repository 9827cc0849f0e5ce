//! Output naming and encoding.

use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::{
    ImageFormat, RgbImage,
    codecs::{
        jpeg::JpegEncoder,
        png::{CompressionType, FilterType, PngEncoder},
    },
};

use crate::{
    foundation::error::{CoverError, CoverResult},
    seed::sha256_hex,
};

/// JPEG quality used for `.jpg`/`.jpeg` outputs.
pub const JPEG_QUALITY: u8 = 92;
const MAX_STEM_CHARS: usize = 80;
const STEM_TRIM: &[char] = &[' ', '.', '-', '_'];
const ILLEGAL: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// A filesystem-safe file stem derived from `text`.
///
/// Whitespace runs become `-`, path and shell-hostile characters are removed, and the result is
/// capped at 80 characters. Text that leaves nothing usable maps to `cover-<hash prefix>`.
pub fn safe_filename_stem(text: &str) -> String {
    let mut stem = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            if !in_space {
                stem.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if ILLEGAL.contains(&ch) || ch.is_control() {
            continue;
        }
        stem.push(ch);
    }

    let stem = collapse_dashes(&stem);
    let stem: String = stem.trim_matches(STEM_TRIM).chars().take(MAX_STEM_CHARS).collect();
    let stem = stem.trim_matches(STEM_TRIM);
    if stem.is_empty() {
        let hash = sha256_hex(text.as_bytes());
        return format!("cover-{}", &hash[..10]);
    }
    stem.to_string()
}

fn collapse_dashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == '-' && out.ends_with('-') {
            continue;
        }
        out.push(ch);
    }
    out
}

/// `<dir>/<safe stem>.png`.
pub fn default_output_path(text: &str, dir: &Path) -> PathBuf {
    dir.join(format!("{}.png", safe_filename_stem(text)))
}

/// Encode `image` to `path`, choosing the encoder from the extension.
///
/// The image is encoded in memory first; parent directories are created as needed and the
/// destination is only written once encoding succeeded.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn save_cover(image: &RgbImage, path: &Path) -> CoverResult<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let format = ImageFormat::from_extension(&ext)
        .ok_or_else(|| CoverError::encode(format!("unsupported output extension '.{ext}'")))?;

    // A failed encode leaves any existing file at `path` untouched.
    let mut buf = Cursor::new(Vec::new());
    let encoded = match format {
        ImageFormat::Jpeg => {
            image.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY))
        }
        ImageFormat::Png => image.write_with_encoder(PngEncoder::new_with_quality(
            &mut buf,
            CompressionType::Best,
            FilterType::Adaptive,
        )),
        other => image.write_to(&mut buf, other),
    };
    encoded.map_err(|e| CoverError::encode(format!("{}: {e}", path.display())))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    std::fs::write(path, buf.into_inner()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
