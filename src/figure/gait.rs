//! Periodic gait functions and the per-limb tables that drive them.
//!
//! A gait is pure data: every joint angle is a [`Wave`] of the tick counter, so the paddling
//! motion can be inspected and tested without drawing anything.

use crate::color::Rgb;
use crate::figure::limb::{Bone, LimbSpec, Membrane};
use crate::foundation::core::{Point, Vec2};

/// A periodic function of the tick counter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wave {
    /// Same value on every tick.
    Const(f64),
    /// `base + step * ((t + phase) mod period)`: a ramp that snaps back every `period` ticks.
    Saw {
        /// Value at the start of each period.
        base: f64,
        /// Increment per tick.
        step: f64,
        /// Ticks per period.
        period: u64,
        /// Tick offset.
        phase: u64,
    },
    /// `base + step * |pivot - (t + phase) mod period|`: a ramp that folds back at `pivot`.
    Fold {
        /// Value when the counter sits on the pivot.
        base: f64,
        /// Increment per tick of distance from the pivot.
        step: f64,
        /// Ticks per period.
        period: u64,
        /// Fold point inside the period.
        pivot: u64,
        /// Tick offset.
        phase: u64,
    },
}

impl Wave {
    /// Sawtooth starting at `base`.
    pub const fn saw(base: f64, step: f64, period: u64) -> Self {
        Self::Saw {
            base,
            step,
            period,
            phase: 0,
        }
    }

    /// Triangle folded at `pivot`.
    pub const fn fold(base: f64, step: f64, period: u64, pivot: u64) -> Self {
        Self::Fold {
            base,
            step,
            period,
            pivot,
            phase: 0,
        }
    }

    /// Same wave advanced by `by` ticks.
    pub const fn shifted(self, by: u64) -> Self {
        match self {
            Self::Const(v) => Self::Const(v),
            Self::Saw {
                base,
                step,
                period,
                phase,
            } => Self::Saw {
                base,
                step,
                period,
                phase: phase + by,
            },
            Self::Fold {
                base,
                step,
                period,
                pivot,
                phase,
            } => Self::Fold {
                base,
                step,
                period,
                pivot,
                phase: phase + by,
            },
        }
    }

    /// Value on tick `t`. A zero period holds the wave at its base.
    pub fn at(self, t: u64) -> f64 {
        match self {
            Self::Const(v) => v,
            Self::Saw {
                base,
                step,
                period,
                phase,
            } => {
                let k = t.wrapping_add(phase).checked_rem(period).unwrap_or(0);
                base + step * k as f64
            }
            Self::Fold {
                base,
                step,
                period,
                pivot,
                phase,
            } => {
                let k = t.wrapping_add(phase).checked_rem(period).unwrap_or(pivot);
                base + step * k.abs_diff(pivot) as f64
            }
        }
    }

    /// Constant wave holding the value this one has on tick `t`.
    pub fn frozen_at(self, t: u64) -> Self {
        Self::Const(self.at(t))
    }
}

/// Gait of one limb: fixed lengths and attachment, waving angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LimbGait {
    /// Attachment point relative to the figure's base point.
    pub anchor: Vec2,
    /// Thigh length.
    pub upper_len: f64,
    /// Thigh direction.
    pub upper_angle: Wave,
    /// Shin length.
    pub lower_len: f64,
    /// Shin direction.
    pub lower_angle: Wave,
    /// Membrane notch radius.
    pub web_min: f64,
    /// Membrane toe radius.
    pub web_max: f64,
    /// Membrane direction.
    pub web_center: Wave,
    /// Membrane opening.
    pub web_spread: Wave,
}

impl LimbGait {
    /// Limb pose on tick `t` for a figure based at `origin`.
    pub fn pose(&self, origin: Point, t: u64, color: Rgb) -> LimbSpec {
        LimbSpec {
            anchor: origin + self.anchor,
            upper: Bone::new(self.upper_len, self.upper_angle.at(t)),
            lower: Bone::new(self.lower_len, self.lower_angle.at(t)),
            membrane: Membrane::new(
                self.web_min,
                self.web_max,
                self.web_center.at(t),
                self.web_spread.at(t).max(0.0),
            ),
            color,
        }
    }

    /// This gait with every angle held at its tick-`t` value.
    pub fn frozen_at(self, t: u64) -> Self {
        Self {
            upper_angle: self.upper_angle.frozen_at(t),
            lower_angle: self.lower_angle.frozen_at(t),
            web_center: self.web_center.frozen_at(t),
            web_spread: self.web_spread.frozen_at(t),
            ..self
        }
    }
}

/// Four frog limbs in drawing order: rear right, rear left, front right, front left.
pub type FrogGait = [LimbGait; 4];

/// Swimming stroke: rear legs kick on a 12-tick cycle, front legs paddle on 5 and 10.
pub const FROG_SWIM: FrogGait = [
    LimbGait {
        anchor: Vec2::new(5.0, -5.0),
        upper_len: 50.0,
        upper_angle: Wave::saw(45.0, -10.0, 12),
        lower_len: 50.0,
        lower_angle: Wave::saw(225.0, 5.0, 12),
        web_min: 50.0,
        web_max: 70.0,
        web_center: Wave::saw(0.0, -9.0, 12),
        web_spread: Wave::Const(30.0),
    },
    LimbGait {
        anchor: Vec2::new(-5.0, -5.0),
        upper_len: 50.0,
        upper_angle: Wave::saw(135.0, 10.0, 12),
        lower_len: 50.0,
        lower_angle: Wave::saw(315.0, -5.0, 12),
        web_min: 50.0,
        web_max: 70.0,
        web_center: Wave::saw(180.0, 9.0, 12),
        web_spread: Wave::Const(30.0),
    },
    LimbGait {
        anchor: Vec2::new(20.0, -50.0),
        upper_len: 40.0,
        upper_angle: Wave::saw(0.0, 15.0, 5).shifted(4),
        lower_len: 40.0,
        lower_angle: Wave::saw(90.0, 10.0, 5),
        web_min: 20.0,
        web_max: 30.0,
        web_center: Wave::saw(90.0, 4.0, 10),
        web_spread: Wave::saw(0.0, 12.0, 4),
    },
    LimbGait {
        anchor: Vec2::new(-20.0, -50.0),
        upper_len: 40.0,
        upper_angle: Wave::saw(180.0, -15.0, 5).shifted(4),
        lower_len: 40.0,
        lower_angle: Wave::saw(90.0, -10.0, 5),
        web_min: 20.0,
        web_max: 30.0,
        web_center: Wave::saw(90.0, -4.0, 10),
        web_spread: Wave::saw(0.0, 12.0, 4),
    },
];

/// Frog held in the [`FROG_SWIM`] pose of tick `pose_tick`, only fluttering its feet: the rear
/// left foot sweeps on a 6-tick cycle and the front right one rocks back and forth.
pub fn frog_paddle_in_place(pose_tick: u64) -> FrogGait {
    let [rear_r, rear_l, front_r, front_l] = FROG_SWIM.map(|g| g.frozen_at(pose_tick));
    [
        rear_r,
        LimbGait {
            web_center: Wave::saw(180.0, 9.0, 6).shifted(pose_tick),
            ..rear_l
        },
        LimbGait {
            web_center: Wave::fold(85.0, 10.0, 10, 5).shifted(pose_tick),
            web_spread: Wave::Const(50.0),
            ..front_r
        },
        LimbGait {
            web_spread: Wave::Const(50.0),
            ..front_l
        },
    ]
}

/// Pose every limb of `gait` on tick `t`.
pub fn pose_all(gait: &[LimbGait], origin: Point, t: u64, color: Rgb) -> Vec<LimbSpec> {
    gait.iter().map(|g| g.pose(origin, t, color)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/figure/gait.rs"]
mod tests;
