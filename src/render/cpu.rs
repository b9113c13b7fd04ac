use crate::foundation::core::{Point, Rect, Vec2};
use crate::foundation::error::{BolotoError, BolotoResult};
use crate::render::backend::FrameRGBA;
use crate::surface::display_list::{DisplayList, DrawOp};
use crate::surface::{ShapeStyle, Stroke};
use kurbo::{BezPath, Shape};

/// Options for the CPU rasterizer.
#[derive(Debug, Clone, Copy)]
pub struct CpuBackendOpts {
    /// Curve flattening tolerance in pixels.
    pub tolerance: f64,
}

impl Default for CpuBackendOpts {
    fn default() -> Self {
        Self { tolerance: 0.1 }
    }
}

/// Rasterizes a [`DisplayList`] into an RGBA frame with `vello_cpu`.
///
/// The render context is kept between frames and only rebuilt when the canvas size changes.
pub struct CpuBackend {
    opts: CpuBackendOpts,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuBackend {
    /// New backend with `opts`.
    pub fn new(opts: CpuBackendOpts) -> Self {
        Self { opts, ctx: None }
    }

    /// Rasterize every recorded op, in order, into a fresh frame.
    pub fn render(&mut self, list: &DisplayList) -> BolotoResult<FrameRGBA> {
        let canvas = list.canvas();
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| BolotoError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| BolotoError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(BolotoError::render("canvas must be non-empty"));
        }

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let tol = self.opts.tolerance;
        for op in list.ops() {
            draw_op(&mut ctx, op, tol);
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp, tol: f64) {
    match op {
        DrawOp::Line { from, to, stroke } => {
            let mut path = BezPath::new();
            path.move_to(*from);
            path.line_to(*to);
            stroke_path(ctx, &path, *stroke, tol);
        }
        DrawOp::Ellipse { bbox, style } => {
            let path = kurbo::Ellipse::from_rect(*bbox).to_path(tol);
            paint_shape(ctx, &path, *style, tol);
        }
        DrawOp::Arc {
            bbox,
            start_deg,
            sweep_deg,
            stroke,
        } => {
            let path = arc_in(*bbox, *start_deg, *sweep_deg).to_path(tol);
            stroke_path(ctx, &path, *stroke, tol);
        }
        DrawOp::Pie {
            bbox,
            start_deg,
            sweep_deg,
            style,
        } => {
            let arc = arc_in(*bbox, *start_deg, *sweep_deg);
            let start = arc.center
                + Vec2::new(
                    arc.radii.x * arc.start_angle.cos(),
                    arc.radii.y * arc.start_angle.sin(),
                );
            let mut path = BezPath::new();
            path.move_to(arc.center);
            path.line_to(start);
            path.extend(arc.append_iter(tol));
            path.close_path();
            paint_shape(ctx, &path, *style, tol);
        }
        DrawOp::Polygon { points, style } => {
            let Some((first, rest)) = points.split_first() else {
                return;
            };
            let mut path = BezPath::new();
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
            path.close_path();
            paint_shape(ctx, &path, *style, tol);
        }
        DrawOp::Rectangle { bbox, style } => {
            let path = bbox.to_path(tol);
            paint_shape(ctx, &path, *style, tol);
        }
    }
}

/// Elliptical arc inscribed in `bbox`, converted from counterclockwise degrees to kurbo's
/// y-down radians.
fn arc_in(bbox: Rect, start_deg: f64, sweep_deg: f64) -> kurbo::Arc {
    kurbo::Arc {
        center: bbox.center(),
        radii: Vec2::new(bbox.width() / 2.0, bbox.height() / 2.0),
        start_angle: -start_deg.to_radians(),
        sweep_angle: -sweep_deg.to_radians(),
        x_rotation: 0.0,
    }
}

fn paint_shape(ctx: &mut vello_cpu::RenderContext, path: &BezPath, style: ShapeStyle, tol: f64) {
    if let Some(fill) = style.fill {
        set_color(ctx, fill.to_rgba8());
        ctx.fill_path(&bezpath_to_cpu(path));
    }
    if let Some(stroke) = style.stroke {
        stroke_path(ctx, path, stroke, tol);
    }
}

fn stroke_path(ctx: &mut vello_cpu::RenderContext, path: &BezPath, stroke: Stroke, tol: f64) {
    if stroke.width <= 0.0 {
        return;
    }
    let outline = kurbo::stroke(
        path.iter(),
        &kurbo::Stroke::new(stroke.width),
        &kurbo::StrokeOpts::default(),
        tol,
    );
    set_color(ctx, stroke.color.to_rgba8());
    ctx.fill_path(&bezpath_to_cpu(&outline));
}

fn set_color(ctx: &mut vello_cpu::RenderContext, [r, g, b, a]: [u8; 4]) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
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
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
