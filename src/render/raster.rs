use kurbo::Shape as _;

use crate::{
    color::Rgba,
    foundation::{
        core::{Affine, BezPath, Point, Rect},
        error::CoverResult,
    },
    render::{Surface, surface::dim_u16},
};

const PATH_TOLERANCE: f64 = 0.1;

/// Thin wrapper over a `vello_cpu` render context targeting one surface-sized pixmap.
pub(crate) struct Rasterizer {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl Rasterizer {
    pub(crate) fn new(width: u32, height: u32) -> CoverResult<Self> {
        let width = dim_u16(width, "width")?;
        let height = dim_u16(height, "height")?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            width,
            height,
        })
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.fill_path(&rect.to_path(PATH_TOLERANCE), color);
    }

    pub(crate) fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgba) {
        let radius = radius.max(0.0).min(rect.width().abs().min(rect.height().abs()) / 2.0);
        let rounded = kurbo::RoundedRect::from_rect(rect, radius);
        self.fill_path(&rounded.to_path(PATH_TOLERANCE), color);
    }

    pub(crate) fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        let circle = kurbo::Circle::new(center, radius);
        self.fill_path(&circle.to_path(PATH_TOLERANCE), color);
    }

    pub(crate) fn fill_path(&mut self, path: &BezPath, color: Rgba) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color.to_cpu_color());
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Draw `image` with its own pixel space mapped through `transform`.
    pub(crate) fn draw_surface(&mut self, image: &Surface, transform: Affine) -> CoverResult<()> {
        let pixmap = image.to_pixmap()?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(std::sync::Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width()),
            f64::from(image.height()),
        ));
        Ok(())
    }

    /// Fill positioned glyphs; glyph coordinates are relative to `origin`.
    pub(crate) fn fill_glyphs(
        &mut self,
        font: &vello_cpu::peniko::FontData,
        font_size: f32,
        origin: Point,
        color: Rgba,
        glyphs: impl Iterator<Item = vello_cpu::Glyph>,
    ) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color.to_cpu_color());
        self.ctx
            .glyph_run(font)
            .font_size(font_size)
            .fill_glyphs(glyphs);
    }

    pub(crate) fn finish(mut self) -> CoverResult<Surface> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Surface::from_pixmap(&pixmap)
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
