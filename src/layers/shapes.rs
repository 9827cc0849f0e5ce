use std::f64::consts::TAU;

use crate::{
    color::{Rgb, Rgba},
    foundation::{
        core::{BezPath, CanvasSize, Point, Rect},
        error::CoverResult,
    },
    palette::Palette,
    render::{Surface, blur, composite, raster::Rasterizer},
    seed::Rng64,
};

/// Geometry of one scattered accent.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Filled disc; may hang off the canvas edge.
    Circle {
        /// Center in canvas pixels.
        center: Point,
        /// Radius in pixels.
        radius: f64,
    },
    /// Thin rounded band.
    Stripe {
        /// Band bounds in canvas pixels.
        rect: Rect,
        /// Corner radius in pixels.
        corner_radius: f64,
    },
    /// Irregular 3 to 6 sided polygon.
    Polygon {
        /// Vertices in drawing order.
        vertices: Vec<Point>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ShapeKind {
    Circle,
    Polygon,
    Stripe,
}

const KINDS: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Polygon, ShapeKind::Stripe];

/// A shape plus the translucent color it is filled with.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedShape {
    /// Geometry.
    pub shape: Shape,
    /// Fill color; alpha is in `[18, 72]`.
    pub fill: Rgba,
}

/// Number of shapes scattered for a density.
pub fn shape_count(density: f64) -> usize {
    if density <= 0.0 {
        return 0;
    }
    (8.0 + 18.0 * density).floor() as usize
}

/// Blur applied to the shape layer before compositing.
pub fn shape_blur_sigma(size: CanvasSize) -> f32 {
    (f64::from(size.min_side()) * 0.008).floor().max(2.0) as f32
}

/// Draw the shape list from the stream without rasterizing anything.
pub fn scatter(
    size: CanvasSize,
    palette: &Palette,
    density: f64,
    rng: &mut Rng64,
) -> Vec<PlacedShape> {
    let count = shape_count(density);
    let colors = [palette.accent, palette.c2, palette.c1];
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let kind = rng.choose(&KINDS).copied().unwrap_or(ShapeKind::Circle);
        let alpha = (18.0 + rng.next_f64() * 55.0).floor() as u8;
        let color: Rgb = rng.choose(&colors).copied().unwrap_or(palette.accent);
        let shape = match kind {
            ShapeKind::Circle => circle(size, rng),
            ShapeKind::Stripe => stripe(size, rng),
            ShapeKind::Polygon => polygon(size, rng),
        };
        out.push(PlacedShape {
            shape,
            fill: color.with_alpha(alpha),
        });
    }
    out
}

/// Scatter, rasterize, soften and composite the accents. Returns the surface and shape count.
#[tracing::instrument(level = "debug", skip(base, palette, rng))]
pub fn apply(
    mut base: Surface,
    palette: &Palette,
    density: f64,
    rng: &mut Rng64,
) -> CoverResult<(Surface, usize)> {
    if density <= 0.0 {
        return Ok((base, 0));
    }
    let size = CanvasSize {
        width: base.width(),
        height: base.height(),
    };
    let shapes = scatter(size, palette, density, rng);

    let mut raster = Rasterizer::new(size.width, size.height)?;
    for placed in &shapes {
        match &placed.shape {
            Shape::Circle { center, radius } => raster.fill_circle(*center, *radius, placed.fill),
            Shape::Stripe {
                rect,
                corner_radius,
            } => raster.fill_rounded_rect(*rect, *corner_radius, placed.fill),
            Shape::Polygon { vertices } => raster.fill_path(&polygon_path(vertices), placed.fill),
        }
    }
    let layer = blur::blur_surface(&raster.finish()?, shape_blur_sigma(size))?;
    composite::over_in_place(&mut base, &layer, 1.0)?;

    tracing::debug!(count = shapes.len(), "shapes composited");
    Ok((base, shapes.len()))
}

fn circle(size: CanvasSize, rng: &mut Rng64) -> Shape {
    let (w, h, min) = dims(size);
    let radius = (min * rng.uniform(0.06, 0.18)).floor();
    let cx = (rng.uniform(-0.1, 1.1) * w).floor();
    let cy = (rng.uniform(-0.1, 1.1) * h).floor();
    Shape::Circle {
        center: Point::new(cx, cy),
        radius,
    }
}

fn stripe(size: CanvasSize, rng: &mut Rng64) -> Shape {
    let (w, h, min) = dims(size);
    let x0 = (rng.uniform(-0.2, 1.0) * w).floor();
    let y0 = (rng.uniform(0.0, 1.0) * h).floor();
    let x1 = x0 + (w * rng.uniform(0.4, 1.2)).floor();
    let y1 = y0 + (h * rng.uniform(0.02, 0.08)).floor();
    Shape::Stripe {
        rect: Rect::new(x0, y0, x1, y1),
        corner_radius: (min * 0.02).floor(),
    }
}

fn polygon(size: CanvasSize, rng: &mut Rng64) -> Shape {
    let (w, h, min) = dims(size);
    let k = rng.range_inclusive(3, 6);
    let cx = rng.uniform(0.0, 1.0) * w;
    let cy = rng.uniform(0.0, 1.0) * h;
    let radius = min * rng.uniform(0.08, 0.22);
    let start = rng.next_f64() * TAU;
    let vertices = (0..k)
        .map(|i| {
            let angle = start + f64::from(i) * (TAU / f64::from(k)) + rng.uniform(-0.25, 0.25);
            let r = radius * rng.uniform(0.65, 1.15);
            Point::new(cx + angle.cos() * r, cy + angle.sin() * r)
        })
        .collect();
    Shape::Polygon { vertices }
}

fn polygon_path(vertices: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = vertices.iter();
    if let Some(&first) = iter.next() {
        path.move_to(first);
        for &p in iter {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

fn dims(size: CanvasSize) -> (f64, f64, f64) {
    (
        f64::from(size.width),
        f64::from(size.height),
        f64::from(size.min_side()),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layers/shapes.rs"]
mod tests;
