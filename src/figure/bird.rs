use crate::color::Rgb;
use crate::figure::limb::{Bone, LimbSpec, Membrane, render_limb};
use crate::foundation::core::{Point, Size};
use crate::foundation::math::mirror_x;
use crate::surface::{ShapeStyle, Stroke, Surface, bbox};

/// Duck-like bird standing on one webbed leg.
///
/// The sign of `head_dx` is the facing: positive looks right, negative looks left, and the whole
/// figure mirrors about the heel.
#[derive(Clone, Debug, PartialEq)]
pub struct BirdSpec {
    /// Heel, where the leg touches the ground.
    pub heel: Point,
    /// Leg length from heel to body.
    pub leg_height: f64,
    /// Body ellipse size.
    pub body: Size,
    /// Head ellipse size.
    pub head: Size,
    /// Signed horizontal head offset from the body center. Past half the body width the head
    /// floats free of the body.
    pub head_dx: f64,
    /// Plumage color; leg and beak are always red.
    pub color: Rgb,
}

impl BirdSpec {
    /// Fraction of the body height at which the head's lower edge sits.
    pub const HEAD_RISE: f64 = 0.75;
    /// Opening of the webbed foot, degrees.
    pub const FOOT_SPREAD: f64 = 50.0;

    /// Bird of the default proportions facing right.
    pub fn new(heel: Point, color: Rgb) -> Self {
        Self {
            heel,
            leg_height: 30.0,
            body: Size::new(60.0, 40.0),
            head: Size::new(30.0, 25.0),
            head_dx: 25.0,
            color,
        }
    }

    /// Same bird looking the other way.
    pub fn mirrored(&self) -> Self {
        Self {
            head_dx: -self.head_dx,
            ..self.clone()
        }
    }

    /// `1.0` when facing right, `-1.0` when facing left.
    pub fn facing(&self) -> f64 {
        if self.head_dx < 0.0 { -1.0 } else { 1.0 }
    }

    /// The single leg: a thigh straight down to the heel, a zero-length shin and a foot pointing
    /// the way the bird faces.
    pub fn leg(&self) -> LimbSpec {
        let r = self.body.height / 4.0;
        let big_r = self.body.width / 4.0;
        LimbSpec {
            anchor: Point::new(self.heel.x, self.heel.y - self.leg_height),
            upper: Bone::new(self.leg_height, 270.0),
            lower: Bone::new(0.0, 0.0),
            membrane: Membrane::new(
                r.min(big_r),
                r.max(big_r),
                90.0 - self.facing() * 90.0,
                Self::FOOT_SPREAD,
            ),
            color: Rgb::RED,
        }
    }

    /// Draw leg, body, head, eye and beak.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let z = self.facing();
        let x0 = self.heel.x;
        let top = self.heel.y - self.leg_height;
        let (bw, bh) = (self.body.width, self.body.height);
        let (hw, hh) = (self.head.width, self.head.height);
        let hx = x0 + self.head_dx;
        let head_y = top - bh * Self::HEAD_RISE;

        render_limb(&self.leg(), surface);

        let plumage = ShapeStyle::outlined(self.color, Stroke::new(self.color.shade(0.5), 1.0));
        surface.ellipse(bbox(x0 - bw / 2.0, top, x0 + bw / 2.0, top - bh), plumage);
        surface.ellipse(bbox(hx + hw / 2.0, head_y, hx - hw / 2.0, head_y - hh), plumage);

        surface.ellipse(
            bbox(
                hx + z * 0.1 * hw,
                head_y - hh * 0.5,
                hx + z * 0.25 * hw,
                head_y - hh * 0.7,
            ),
            ShapeStyle::outlined(Rgb::WHITE, Stroke::new(Rgb::BLACK, 2.0)),
        );

        let beak_y = head_y - hh * 0.5;
        let mut beak = [
            Point::new(hx + hw / 2.0, beak_y),
            Point::new(hx + hw / 2.0 + hw * 0.1, beak_y - hh / 5.0),
            Point::new(hx + hw / 2.0 - hw * 0.2, beak_y),
            Point::new(hx + hw / 2.0 + hw * 0.1, beak_y + hh / 5.0),
        ];
        if z < 0.0 {
            beak = beak.map(|p| mirror_x(p, hx));
        }
        surface.polygon(
            &beak,
            ShapeStyle::outlined(Rgb::RED, Stroke::new(Rgb::RED, 2.0)),
        );
    }
}
