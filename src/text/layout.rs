//! Title block measurement, placement and drawing.

use crate::{
    color::{Rgb, Rgba},
    foundation::{
        core::{CanvasSize, Point, Rect, Vec2},
        error::CoverResult,
    },
    palette::Palette,
    render::{Surface, raster::Rasterizer},
    style::{Align, Theme},
    text::{
        font::TextEngine,
        wrap::{MeasureText, WrapMode, wrap_text},
    },
};

/// One wrapped line and where it lands.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineMetrics {
    /// Line contents.
    pub text: String,
    /// Measured width in pixels.
    pub width: f64,
    /// Measured height in pixels.
    pub height: f64,
    /// Top-left corner on the canvas.
    pub origin: Point,
}

/// Geometry of the whole text block.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextBlockMetrics {
    /// Title font size in pixels.
    pub title_size: f32,
    /// Subtitle font size in pixels.
    pub subtitle_size: f32,
    /// Outer margin in pixels.
    pub margin: f64,
    /// Widest a line may be before wrapping.
    pub max_width: f64,
    /// Title lines, top to bottom.
    pub title_lines: Vec<LineMetrics>,
    /// How the title was wrapped.
    pub title_wrap: WrapMode,
    /// Subtitle lines; empty without a subtitle.
    pub subtitle_lines: Vec<LineMetrics>,
    /// How the subtitle was wrapped, if there is one.
    pub subtitle_wrap: Option<WrapMode>,
    /// Gap between title lines.
    pub line_gap: f64,
    /// Gap between subtitle lines.
    pub sub_gap: f64,
    /// Gap between the title and subtitle groups; zero without a subtitle.
    pub block_gap: f64,
    /// Width of the widest line.
    pub block_width: f64,
    /// Height of all lines and gaps.
    pub block_height: f64,
    /// Top-left of the block.
    pub origin: Point,
    /// Horizontal scrim padding.
    pub pad_x: f64,
    /// Vertical scrim padding.
    pub pad_y: f64,
    /// Rounded legibility panel behind the text.
    pub scrim: Rect,
    /// Short accent bar above the scrim.
    pub accent_bar: Rect,
}

/// Per-canvas proportions of the text block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockScale {
    /// Title font size.
    pub title_size: f32,
    /// Subtitle font size.
    pub subtitle_size: f32,
    /// Margin in pixels.
    pub margin: f64,
}

impl BlockScale {
    /// Sizes for `canvas` and a margin ratio (clamped to `[0.04, 0.12]`).
    pub fn for_canvas(canvas: CanvasSize, margin_ratio: f64) -> Self {
        let min = f64::from(canvas.min_side());
        let ratio = if margin_ratio.is_nan() {
            0.04
        } else {
            margin_ratio.clamp(0.04, 0.12)
        };
        Self {
            title_size: (min * 0.085).floor() as f32,
            subtitle_size: (min * 0.040).floor() as f32,
            margin: (min * ratio).floor(),
        }
    }
}

/// Wrap, measure and place the title block. `subtitle` is ignored when blank.
pub fn measure_block<M: MeasureText + ?Sized>(
    measurer: &mut M,
    canvas: CanvasSize,
    title: &str,
    subtitle: Option<&str>,
    margin_ratio: f64,
    align: Align,
) -> TextBlockMetrics {
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let min = f64::from(canvas.min_side());
    let scale = BlockScale::for_canvas(canvas, margin_ratio);
    let margin = scale.margin;
    let max_width = w - 2.0 * margin;

    let title_wrapped = wrap_text(measurer, title, scale.title_size, max_width);
    let subtitle_wrapped = subtitle
        .filter(|s| !s.trim().is_empty())
        .map(|s| wrap_text(measurer, s, scale.subtitle_size, max_width));

    let mut title_lines = measure_lines(measurer, &title_wrapped.lines, scale.title_size);
    let mut subtitle_lines = subtitle_wrapped
        .as_ref()
        .map(|s| measure_lines(measurer, &s.lines, scale.subtitle_size))
        .unwrap_or_default();

    let line_gap = (f64::from(scale.title_size) * 0.22).floor();
    let sub_gap = (f64::from(scale.subtitle_size) * 0.35).floor();
    let block_gap = if subtitle_lines.is_empty() {
        0.0
    } else {
        (f64::from(scale.title_size) * 0.35).floor()
    };

    let block_width = title_lines
        .iter()
        .chain(&subtitle_lines)
        .map(|l| l.width)
        .fold(0.0, f64::max);
    let mut block_height = stack_height(&title_lines, line_gap);
    if !subtitle_lines.is_empty() {
        block_height += block_gap + stack_height(&subtitle_lines, sub_gap);
    }

    let x0 = match align {
        Align::Left => margin,
        Align::Center => ((w - block_width) / 2.0).floor(),
        Align::Right => w - margin - block_width,
    };
    let pad_x = (min * 0.030).floor();
    let pad_y = (min * 0.022).floor();
    let lo = margin + pad_y;
    let hi = h - margin - pad_y - block_height;
    let centered = (h * 0.60).floor() - (block_height / 2.0).floor();
    let y0 = if hi < lo { lo } else { centered.clamp(lo, hi) };

    let mut y = y0;
    place_lines(&mut title_lines, x0, &mut y, block_width, line_gap, align);
    y += block_gap;
    place_lines(&mut subtitle_lines, x0, &mut y, block_width, sub_gap, align);

    let scrim = Rect::new(
        x0 - pad_x,
        y0 - pad_y,
        x0 + block_width + pad_x,
        y0 + block_height + pad_y,
    );
    let bar_width = (block_width.min(w - 2.0 * margin) * 0.18).floor();
    let bar_height = (min * 0.010).floor().max(6.0);
    let bar_bottom = y0 - (pad_y * 0.8).floor() - 6.0;
    let accent_bar = Rect::new(x0, bar_bottom - bar_height, x0 + bar_width, bar_bottom);

    TextBlockMetrics {
        title_size: scale.title_size,
        subtitle_size: scale.subtitle_size,
        margin,
        max_width,
        title_lines,
        title_wrap: title_wrapped.mode,
        subtitle_lines,
        subtitle_wrap: subtitle_wrapped.map(|s| s.mode),
        line_gap,
        sub_gap,
        block_gap,
        block_width,
        block_height,
        origin: Point::new(x0, y0),
        pad_x,
        pad_y,
        scrim,
        accent_bar,
    }
}

/// Draw the scrim, accent bar and shadowed lines onto a transparent layer.
#[tracing::instrument(level = "debug", skip_all)]
pub fn draw_block(
    engine: &mut TextEngine,
    canvas: CanvasSize,
    metrics: &TextBlockMetrics,
    palette: &Palette,
    theme: Theme,
) -> CoverResult<Surface> {
    let colors = ThemeInk::for_theme(theme);
    let min = f64::from(canvas.min_side());
    let mut raster = Rasterizer::new(canvas.width, canvas.height)?;

    raster.fill_rounded_rect(metrics.scrim, (min * 0.028).floor(), colors.scrim);

    let bar = metrics.accent_bar;
    raster.fill_rounded_rect(bar, (bar.height() / 2.0).floor(), palette.accent.with_alpha(210));

    let title_fg = palette.text.with_alpha(255);
    for line in &metrics.title_lines {
        let shadow_at = line.origin + Vec2::new(2.0, 2.0);
        engine.draw_line(&mut raster, &line.text, metrics.title_size, shadow_at, colors.title_shadow);
        engine.draw_line(&mut raster, &line.text, metrics.title_size, line.origin, title_fg);
    }
    for line in &metrics.subtitle_lines {
        let shadow_at = line.origin + Vec2::new(1.0, 1.0);
        let size = metrics.subtitle_size;
        engine.draw_line(&mut raster, &line.text, size, shadow_at, colors.subtitle_shadow);
        engine.draw_line(&mut raster, &line.text, size, line.origin, colors.subtitle);
    }

    raster.finish()
}

struct ThemeInk {
    scrim: Rgba,
    title_shadow: Rgba,
    subtitle_shadow: Rgba,
    subtitle: Rgba,
}

impl ThemeInk {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                scrim: Rgb::new(255, 255, 255).with_alpha(170),
                title_shadow: Rgb::new(255, 255, 255).with_alpha(150),
                subtitle_shadow: Rgb::new(255, 255, 255).with_alpha(140),
                subtitle: Rgba::new(35, 38, 44, 220),
            },
            Theme::Dark => Self {
                scrim: Rgb::new(0, 0, 0).with_alpha(110),
                title_shadow: Rgb::new(0, 0, 0).with_alpha(160),
                subtitle_shadow: Rgb::new(0, 0, 0).with_alpha(140),
                subtitle: Rgba::new(230, 233, 238, 230),
            },
        }
    }
}

fn measure_lines<M: MeasureText + ?Sized>(
    measurer: &mut M,
    lines: &[String],
    font_size: f32,
) -> Vec<LineMetrics> {
    lines
        .iter()
        .map(|text| {
            let (width, height) = measurer.measure(text, font_size);
            LineMetrics {
                text: text.clone(),
                width: width.ceil(),
                height: height.ceil(),
                origin: Point::ORIGIN,
            }
        })
        .collect()
}

fn stack_height(lines: &[LineMetrics], gap: f64) -> f64 {
    let heights: f64 = lines.iter().map(|l| l.height).sum();
    heights + gap * (lines.len().saturating_sub(1) as f64)
}

fn place_lines(
    lines: &mut [LineMetrics],
    x0: f64,
    y: &mut f64,
    block_width: f64,
    gap: f64,
    align: Align,
) {
    let count = lines.len();
    for (i, line) in lines.iter_mut().enumerate() {
        let dx = match align {
            Align::Left => 0.0,
            Align::Center => ((block_width - line.width) / 2.0).floor(),
            Align::Right => block_width - line.width,
        };
        line.origin = Point::new(x0 + dx, *y);
        *y += line.height;
        if i + 1 < count {
            *y += gap;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
