use crate::color::Rgb;
use crate::figure::snail::SnailSpec;
use crate::foundation::core::{Point, Size};

/// A line of ever smaller, ever more drifted copies of one figure trailing a leader.
///
/// Member `i` is scaled by `shrink^i` and sits `spacing * |w_i|` to the left of member `i - 1`,
/// where `w_i` is its own scaled width. The line always trails toward decreasing x; facing only
/// mirrors each member. Colors are shaded `i` times, so they drift and may wrap.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Chain {
    /// Number of members including the leader.
    pub len: usize,
    /// Per-member scale factor.
    pub shrink: f64,
    /// Leftward gap to the previous member, in multiples of the member's own width.
    pub spacing: f64,
    /// Leader size (half-width, height).
    pub base: Size,
    /// Leader body color.
    pub body_color: Rgb,
    /// Body shade applied once per member.
    pub body_shade: f64,
    /// Leader head color.
    pub head_color: Rgb,
    /// Head shade applied once per member.
    pub head_shade: f64,
}

impl Default for Chain {
    fn default() -> Self {
        Self {
            len: 7,
            shrink: 0.9,
            spacing: 2.5,
            base: Size::new(50.0, 60.0),
            body_color: Rgb::new(180, 200, 100),
            body_shade: 1.05,
            head_color: Rgb::new(200, 200, 10),
            head_shade: 0.8,
        }
    }
}

/// One placed member of a [`Chain`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainLink {
    /// Position in the chain, 0 is the leader.
    pub index: usize,
    /// `shrink^index`.
    pub scale: f64,
    /// Anchor of this member.
    pub position: Point,
    /// Scaled size; the width carries the facing sign.
    pub size: Size,
    /// Drifted body color.
    pub body_color: Rgb,
    /// Drifted head color.
    pub head_color: Rgb,
}

impl Chain {
    /// Lay out all members from `leader` leftward. `facing` is `1.0` (looking right) or `-1.0`
    /// and only signs the widths.
    pub fn links(&self, leader: Point, facing: f64) -> Vec<ChainLink> {
        let mut out = Vec::with_capacity(self.len);
        let mut x = leader.x;
        let mut scale = 1.0;
        let mut body = self.body_color;
        let mut head = self.head_color;
        for index in 0..self.len {
            if index > 0 {
                scale *= self.shrink;
                body = body.shade(self.body_shade);
                head = head.shade(self.head_shade);
            }
            let w = self.base.width * scale * facing;
            if index > 0 {
                x -= self.spacing * w.abs();
            }
            out.push(ChainLink {
                index,
                scale,
                position: Point::new(x, leader.y),
                size: Size::new(w, self.base.height * scale),
                body_color: body,
                head_color: head,
            });
        }
        out
    }

    /// The chain as snails.
    pub fn snails(&self, leader: Point, facing: f64) -> Vec<SnailSpec> {
        self.links(leader, facing)
            .into_iter()
            .map(|l| SnailSpec {
                base: l.position,
                dx: l.size.width,
                dy: l.size.height,
                body_color: l.body_color,
                head_color: l.head_color,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/chain.rs"]
mod tests;
