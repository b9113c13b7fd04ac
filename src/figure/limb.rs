use crate::color::Rgb;
use crate::foundation::core::Point;
use crate::foundation::math::polar;
use crate::surface::{ShapeStyle, Stroke, Surface};

/// Pen width of the two bone strokes.
pub const BONE_WIDTH: f64 = 3.0;
/// Pen width of the membrane outline.
pub const WEB_OUTLINE_WIDTH: f64 = 1.0;
/// Brightness factor applied to the limb color for bones and outline.
pub const OUTLINE_SHADE: f64 = 0.5;

/// One straight bone: length plus absolute direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bone {
    /// Length in pixels; zero collapses the joint onto its parent.
    pub len: f64,
    /// Direction in degrees, counterclockwise from the positive x axis. Not relative to the
    /// previous bone and not range-normalized.
    pub angle_deg: f64,
}

impl Bone {
    /// Bone of `len` pointing at `angle_deg`.
    pub const fn new(len: f64, angle_deg: f64) -> Self {
        Self { len, angle_deg }
    }
}

/// Webbed fan at the end of a limb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Membrane {
    /// Radius of the two inner notches.
    pub min_r: f64,
    /// Radius of the middle toe.
    pub max_r: f64,
    /// Direction of the middle toe, degrees.
    pub center_deg: f64,
    /// Total opening angle, degrees. Zero collapses the fan onto one ray.
    pub spread_deg: f64,
}

impl Membrane {
    /// Fan with the given radii and opening.
    pub const fn new(min_r: f64, max_r: f64, center_deg: f64, spread_deg: f64) -> Self {
        Self {
            min_r,
            max_r,
            center_deg,
            spread_deg,
        }
    }

    /// The six fan vertices rooted at `root`.
    ///
    /// Order: root, then five rays evenly spaced from `center - spread/2` to `center + spread/2`
    /// with radii `(r+R)/2, r, R, r, (r+R)/2`, which gives the paddle its toes.
    pub fn fan(&self, root: Point) -> [Point; 6] {
        let start = self.center_deg - self.spread_deg / 2.0;
        let quarter = self.spread_deg / 4.0;
        let mid = (self.min_r + self.max_r) / 2.0;
        let radii = [mid, self.min_r, self.max_r, self.min_r, mid];

        let mut out = [root; 6];
        for (i, r) in radii.into_iter().enumerate() {
            out[i + 1] = polar(root, r, start + quarter * i as f64);
        }
        out
    }
}

/// Complete description of one limb for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LimbSpec {
    /// Where the limb attaches to the body.
    pub anchor: Point,
    /// Thigh, from the anchor to the knee.
    pub upper: Bone,
    /// Shin, from the knee to the foot.
    pub lower: Bone,
    /// Webbed foot rooted at the end of the shin.
    pub membrane: Membrane,
    /// Membrane fill; bones and outline use it at half brightness.
    pub color: Rgb,
}

/// Joint positions and membrane outline computed from a [`LimbSpec`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LimbGeometry {
    /// Attachment point.
    pub anchor: Point,
    /// End of the upper bone.
    pub knee: Point,
    /// End of the lower bone, root of the membrane.
    pub foot: Point,
    /// Membrane polygon, see [`Membrane::fan`].
    pub web: [Point; 6],
}

impl LimbSpec {
    /// Two-link forward kinematics with absolute joint angles.
    pub fn geometry(&self) -> LimbGeometry {
        let knee = polar(self.anchor, self.upper.len, self.upper.angle_deg);
        let foot = polar(knee, self.lower.len, self.lower.angle_deg);
        LimbGeometry {
            anchor: self.anchor,
            knee,
            foot,
            web: self.membrane.fan(foot),
        }
    }
}

/// Draw both bones, then the filled membrane on top of them.
///
/// Any input renders: zero lengths draw dots, zero spread draws a sliver, and a membrane whose
/// `min_r` exceeds `max_r` simply bulges inward.
pub fn render_limb(limb: &LimbSpec, surface: &mut dyn Surface) {
    let g = limb.geometry();
    let dark = limb.color.shade(OUTLINE_SHADE);

    let bone_pen = Stroke::new(dark, BONE_WIDTH);
    surface.line(g.anchor, g.knee, bone_pen);
    surface.line(g.knee, g.foot, bone_pen);

    surface.polygon(
        &g.web,
        ShapeStyle::outlined(limb.color, Stroke::new(dark, WEB_OUTLINE_WIDTH)),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/figure/limb.rs"]
mod tests;
