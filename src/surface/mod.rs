//! The drawing-surface contract figures are rendered through.
//!
//! Every call carries its own colors; there is no "current pen" state to set up first. Angles are
//! degrees, counterclockwise from 3 o'clock, and bounding boxes may be given with their corners in
//! any order.

use crate::color::Rgb;
use crate::foundation::core::{Point, Rect, Size};

/// Display-list recording surface.
pub mod display_list;

/// Pen used for lines, arcs and shape outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Pen color.
    pub color: Rgb,
    /// Pen width in pixels.
    pub width: f64,
}

impl Stroke {
    /// Pen of `color` and `width`.
    pub fn new(color: Rgb, width: f64) -> Self {
        Self { color, width }
    }
}

/// Fill and outline of a closed shape; either part may be absent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    /// Interior color.
    pub fill: Option<Rgb>,
    /// Outline pen.
    pub stroke: Option<Stroke>,
}

impl ShapeStyle {
    /// Fill only.
    pub fn filled(fill: Rgb) -> Self {
        Self {
            fill: Some(fill),
            stroke: None,
        }
    }

    /// Fill with an outline.
    pub fn outlined(fill: Rgb, stroke: Stroke) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some(stroke),
        }
    }
}

/// Drawing surface a frame is composed on.
pub trait Surface {
    /// Surface width and height, in pixels.
    fn extent(&self) -> Size;

    /// Straight segment.
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);

    /// Ellipse inscribed in `bbox`.
    fn ellipse(&mut self, bbox: Rect, style: ShapeStyle);

    /// Open arc of the ellipse inscribed in `bbox`.
    fn arc(&mut self, bbox: Rect, start_deg: f64, sweep_deg: f64, stroke: Stroke);

    /// Closed sector of the ellipse inscribed in `bbox`.
    fn pie(&mut self, bbox: Rect, start_deg: f64, sweep_deg: f64, style: ShapeStyle);

    /// Closed polygon; fewer than three distinct points still record a (degenerate) shape.
    fn polygon(&mut self, points: &[Point], style: ShapeStyle);

    /// Axis-aligned rectangle.
    fn rectangle(&mut self, bbox: Rect, style: ShapeStyle);
}

/// Bounding box from two opposite corners given in any order.
pub fn bbox(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
    Rect::new(x0, y0, x1, y1).abs()
}
