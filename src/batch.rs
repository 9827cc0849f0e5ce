//! JSON manifest of independent render jobs, rendered in parallel.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{
    foundation::{
        core::CanvasSize,
        error::{CoverError, CoverResult},
    },
    layers::VignetteMask,
    output::{default_output_path, save_cover},
    pipeline::{RenderRequest, render_cover},
    style::{self, Align, DEFAULT_STYLE, StyleOverrides},
    text::resolve_font_path,
};

/// Top-level manifest document.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchManifest {
    /// Jobs in output order.
    pub jobs: Vec<BatchJob>,
}

/// One entry of a manifest; mirrors the command-line flags.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchJob {
    /// Title text (required, non-blank).
    pub text: String,
    /// Optional subtitle.
    pub subtitle: Option<String>,
    /// Output path; defaults to `<out_dir>/<safe stem>.png`.
    pub out: Option<PathBuf>,
    /// `"<w>x<h>"`; defaults to 1600x900.
    pub size: Option<String>,
    /// Preset name; must exist.
    pub style: Option<String>,
    /// Explicit seed.
    pub seed: Option<u64>,
    /// Font file.
    pub font: Option<PathBuf>,
    /// Grain strength.
    pub noise: Option<f64>,
    /// Shape density.
    pub shapes: Option<f64>,
    /// Vignette strength.
    pub vignette: Option<f64>,
    /// `left`, `center` or `right`; anything else is `left`.
    pub align: Option<String>,
    /// Margin ratio.
    pub margin: Option<f64>,
    /// Vignette mask shape.
    pub vignette_mask: Option<VignetteMask>,
}

/// Outcome of one job, in manifest order.
#[derive(Debug)]
pub struct JobOutcome {
    /// Zero-based position in the manifest.
    pub index: usize,
    /// Written file, or why the job failed.
    pub result: CoverResult<PathBuf>,
}

impl BatchManifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(json: &str) -> CoverResult<Self> {
        serde_json::from_str(json).map_err(|e| CoverError::serde(format!("batch manifest: {e}")))
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> CoverResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CoverError::validation(format!("read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}

impl BatchJob {
    /// Validate the job and build its render request and output path.
    pub fn to_request(&self, out_dir: &Path) -> CoverResult<(RenderRequest, PathBuf)> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(CoverError::validation("text must be non-empty"));
        }
        let size = match &self.size {
            Some(s) => CanvasSize::parse(s)?,
            None => CanvasSize::default(),
        };
        let style_name = self.style.clone().unwrap_or_else(|| DEFAULT_STYLE.to_string());
        if style::lookup(&style_name).is_none() {
            return Err(CoverError::validation(format!(
                "unknown style '{style_name}'"
            )));
        }

        let req = RenderRequest {
            text: text.to_string(),
            subtitle: self.subtitle.clone(),
            size,
            style: style_name,
            seed: self.seed,
            font_path: resolve_font_path(self.font.as_deref()),
            overrides: StyleOverrides {
                noise: self.noise,
                shapes: self.shapes,
                vignette: self.vignette,
                align: self.align.as_deref().map(Align::parse_lenient),
                margin: self.margin,
            },
            vignette_mask: self.vignette_mask.unwrap_or_default(),
        };
        let out = self
            .out
            .clone()
            .unwrap_or_else(|| default_output_path(text, out_dir));
        Ok((req, out))
    }
}

/// Render and save every job in parallel. Outcomes come back in manifest order.
#[tracing::instrument(skip(manifest), fields(jobs = manifest.jobs.len()))]
pub fn run_batch(manifest: &BatchManifest, out_dir: &Path) -> Vec<JobOutcome> {
    manifest
        .jobs
        .par_iter()
        .enumerate()
        .map(|(index, job)| {
            let result = run_job(job, out_dir);
            match &result {
                Ok(path) => tracing::info!(index, path = %path.display(), "job written"),
                Err(err) => tracing::warn!(index, error = %err, "job failed"),
            }
            JobOutcome { index, result }
        })
        .collect()
}

fn run_job(job: &BatchJob, out_dir: &Path) -> CoverResult<PathBuf> {
    let (req, out) = job.to_request(out_dir)?;
    let cover = render_cover(&req)?;
    save_cover(&cover.image, &out)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/unit/batch.rs"]
mod tests;
