use crate::color::Rgb;
use crate::foundation::core::Point;
use crate::surface::{ShapeStyle, Stroke, Surface, bbox};
use std::f64::consts::PI;

/// Segments used for each half-ellipse of the head crescent.
const CRESCENT_SEGMENTS: usize = 16;

/// Snail: a dome-shaped shell with a crescent head sticking out in front.
#[derive(Clone, Debug, PartialEq)]
pub struct SnailSpec {
    /// Bottom-center of the shell.
    pub base: Point,
    /// Signed half-width of the shell; negative mirrors the snail to face left.
    pub dx: f64,
    /// Shell height.
    pub dy: f64,
    /// Shell color.
    pub body_color: Rgb,
    /// Head and eye color.
    pub head_color: Rgb,
}

impl SnailSpec {
    /// Horizontal center of the head.
    pub fn head_center(&self) -> Point {
        Point::new(self.base.x + self.dx, self.base.y - self.dy / 2.0)
    }

    /// The two crescent tips, where the eyes sit.
    pub fn eye_centers(&self) -> [Point; 2] {
        let c = self.head_center();
        [
            Point::new(c.x - self.dx / 2.0, c.y),
            Point::new(c.x + self.dx / 2.0, c.y),
        ]
    }

    /// Closed outline of the head: the lower half of the outer ellipse, then the lower half of
    /// the flatter inner one walked back to the starting tip.
    pub fn head_outline(&self) -> Vec<Point> {
        let c = self.head_center();
        let rx = self.dx.abs() / 2.0;
        let outer_ry = self.dy / 2.0;
        let inner_ry = self.dy / 5.0;

        let n = CRESCENT_SEGMENTS;
        let at = |ry: f64, i: usize| {
            let theta = PI * i as f64 / n as f64;
            Point::new(c.x + rx * theta.cos(), c.y + ry * theta.sin())
        };
        let mut out = Vec::with_capacity(2 * (n + 1));
        out.extend((0..=n).map(|i| at(outer_ry, i)));
        out.extend((0..=n).rev().map(|i| at(inner_ry, i)));
        out
    }

    /// Draw shell, head and eyes.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let Point { x: x0, y: y0 } = self.base;
        let (dx, dy) = (self.dx, self.dy);

        surface.pie(
            bbox(x0 - dx, y0 - dy, x0 + dx, y0 + dy),
            0.0,
            180.0,
            ShapeStyle::outlined(self.body_color, Stroke::new(self.body_color, 1.0)),
        );

        let pen = Stroke::new(self.head_color, 1.0);
        surface.polygon(&self.head_outline(), ShapeStyle::filled(self.head_color));
        surface.arc(
            bbox(x0 + dx / 2.0, y0 - dy, x0 + dx * 3.0 / 2.0, y0),
            180.0,
            180.0,
            pen,
        );
        surface.arc(
            bbox(
                x0 + dx / 2.0,
                y0 - dy / 2.0 + dy / 5.0,
                x0 + dx * 3.0 / 2.0,
                y0 - dy / 2.0 - dy / 5.0,
            ),
            180.0,
            180.0,
            pen,
        );

        let eye_r = dx.abs() / 10.0;
        for c in self.eye_centers() {
            surface.ellipse(circle(c, eye_r), ShapeStyle::outlined(self.head_color, pen));
        }
    }
}

fn circle(c: Point, r: f64) -> crate::foundation::core::Rect {
    bbox(c.x - r, c.y - r, c.x + r, c.y + r)
}
