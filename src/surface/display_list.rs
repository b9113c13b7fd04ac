use crate::foundation::core::{Canvas, Point, Rect, Size};
use crate::surface::{ShapeStyle, Stroke, Surface};
use smallvec::SmallVec;

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Straight segment.
    Line {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Pen.
        stroke: Stroke,
    },
    /// Ellipse inscribed in a box.
    Ellipse {
        /// Normalized bounding box.
        bbox: Rect,
        /// Fill and outline.
        style: ShapeStyle,
    },
    /// Open elliptical arc.
    Arc {
        /// Normalized bounding box of the full ellipse.
        bbox: Rect,
        /// Start angle, degrees counterclockwise from 3 o'clock.
        start_deg: f64,
        /// Signed sweep in degrees; positive is counterclockwise.
        sweep_deg: f64,
        /// Pen.
        stroke: Stroke,
    },
    /// Closed elliptical sector.
    Pie {
        /// Normalized bounding box of the full ellipse.
        bbox: Rect,
        /// Start angle, degrees counterclockwise from 3 o'clock.
        start_deg: f64,
        /// Signed sweep in degrees; positive is counterclockwise.
        sweep_deg: f64,
        /// Fill and outline.
        style: ShapeStyle,
    },
    /// Closed polygon.
    Polygon {
        /// Vertices in drawing order.
        points: SmallVec<[Point; 8]>,
        /// Fill and outline.
        style: ShapeStyle,
    },
    /// Axis-aligned rectangle.
    Rectangle {
        /// Normalized box.
        bbox: Rect,
        /// Fill and outline.
        style: ShapeStyle,
    },
}

/// Off-screen surface that records drawing calls in order.
///
/// A frame is composed into a display list and only handed to a rasterizer once complete, so no
/// half-drawn frame is ever presented.
#[derive(Clone, Debug)]
pub struct DisplayList {
    canvas: Canvas,
    ops: Vec<DrawOp>,
}

impl DisplayList {
    /// Empty list for a surface of `canvas` size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ops: Vec::new(),
        }
    }

    /// Surface size the list was recorded for.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Recorded calls in drawing order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drop every recorded call, keeping the allocation.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Return `true` when nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Surface for DisplayList {
    fn extent(&self) -> Size {
        self.canvas.size()
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.ops.push(DrawOp::Line { from, to, stroke });
    }

    fn ellipse(&mut self, bbox: Rect, style: ShapeStyle) {
        self.ops.push(DrawOp::Ellipse {
            bbox: bbox.abs(),
            style,
        });
    }

    fn arc(&mut self, bbox: Rect, start_deg: f64, sweep_deg: f64, stroke: Stroke) {
        self.ops.push(DrawOp::Arc {
            bbox: bbox.abs(),
            start_deg,
            sweep_deg,
            stroke,
        });
    }

    fn pie(&mut self, bbox: Rect, start_deg: f64, sweep_deg: f64, style: ShapeStyle) {
        self.ops.push(DrawOp::Pie {
            bbox: bbox.abs(),
            start_deg,
            sweep_deg,
            style,
        });
    }

    fn polygon(&mut self, points: &[Point], style: ShapeStyle) {
        self.ops.push(DrawOp::Polygon {
            points: SmallVec::from_slice(points),
            style,
        });
    }

    fn rectangle(&mut self, bbox: Rect, style: ShapeStyle) {
        self.ops.push(DrawOp::Rectangle {
            bbox: bbox.abs(),
            style,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/display_list.rs"]
mod tests;
