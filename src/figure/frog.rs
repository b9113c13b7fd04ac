use crate::color::Rgb;
use crate::figure::gait::{LimbGait, pose_all};
use crate::figure::limb::{LimbSpec, render_limb};
use crate::foundation::core::{Point, Size};
use crate::surface::{ShapeStyle, Stroke, Surface, bbox};

/// Frog seen from above, body first, limbs drawn over it.
#[derive(Clone, Debug, PartialEq)]
pub struct FrogSpec {
    /// Bottom-center of the body.
    pub base: Point,
    /// Body ellipse size.
    pub body: Size,
    /// Head ellipse size.
    pub head: Size,
    /// Skin color; outlines use it at half brightness.
    pub color: Rgb,
    /// Limbs in drawing order.
    pub limbs: Vec<LimbSpec>,
}

impl FrogSpec {
    /// Fraction of the body height at which the head's lower edge sits.
    pub const HEAD_RISE: f64 = 0.9;
    /// Outline pen width.
    pub const OUTLINE_WIDTH: f64 = 2.0;

    /// Limbless frog of the default proportions.
    pub fn new(base: Point, color: Rgb) -> Self {
        Self {
            base,
            body: Size::new(50.0, 80.0),
            head: Size::new(100.0, 30.0),
            color,
            limbs: Vec::new(),
        }
    }

    /// Attach limbs posed from `gait` on tick `t`.
    pub fn with_gait(mut self, gait: &[LimbGait], t: u64) -> Self {
        self.limbs = pose_all(gait, self.base, t, self.color);
        self
    }

    /// Lower edge of the head.
    pub fn head_bottom(&self) -> f64 {
        self.base.y - self.body.height * Self::HEAD_RISE
    }

    /// Draw body, head, eyes, then every limb.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let Point { x: x0, y: y0 } = self.base;
        let style = ShapeStyle::outlined(
            self.color,
            Stroke::new(self.color.shade(0.5), Self::OUTLINE_WIDTH),
        );
        let (bw, bh) = (self.body.width, self.body.height);
        let (hw, hh) = (self.head.width, self.head.height);
        let head_y = self.head_bottom();

        surface.ellipse(bbox(x0 - bw / 2.0, y0, x0 + bw / 2.0, y0 - bh), style);
        surface.ellipse(bbox(x0 - hw / 2.0, head_y, x0 + hw / 2.0, head_y - hh), style);

        let eye_y = head_y - hh * 0.7;
        for side in [-1.0, 1.0] {
            surface.ellipse(
                bbox(
                    x0 + side * hw * 0.4,
                    eye_y,
                    x0 + side * hw * 0.1,
                    eye_y - hw * 0.2,
                ),
                style,
            );
        }

        for limb in &self.limbs {
            render_limb(limb, surface);
        }
    }
}
