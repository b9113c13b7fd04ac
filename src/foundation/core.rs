use crate::foundation::error::{BolotoError, BolotoResult};
use std::time::Duration;

pub use kurbo::{Point, Rect, Size, Vec2};

/// Absolute 0-based tick index; one tick renders exactly one frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Inclusive tick range `[first, last]`, the shape every animation loop runs over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TickRange {
    /// First tick rendered.
    pub first: FrameIndex,
    /// Last tick rendered (inclusive).
    pub last: FrameIndex,
}

impl TickRange {
    /// Create a validated range with `first <= last`.
    pub fn new(first: FrameIndex, last: FrameIndex) -> BolotoResult<Self> {
        if first.0 > last.0 {
            return Err(BolotoError::validation("TickRange first must be <= last"));
        }
        Ok(Self { first, last })
    }

    /// Range `0..=last`.
    pub fn up_to(last: u64) -> Self {
        Self {
            first: FrameIndex(0),
            last: FrameIndex(last),
        }
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.last.0 - self.first.0 + 1
    }

    /// Return `true` when `t` is inside `[first, last]`.
    pub fn contains(self, t: FrameIndex) -> bool {
        self.first.0 <= t.0 && t.0 <= self.last.0
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> BolotoResult<Self> {
        if den == 0 {
            return Err(BolotoError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(BolotoError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frame rate implied by a fixed per-frame pacing delay (300 ms -> 10/3 fps).
    pub fn from_frame_delay(delay: Duration) -> BolotoResult<Self> {
        let ms = u32::try_from(delay.as_millis())
            .map_err(|_| BolotoError::validation("frame delay is too long"))?;
        if ms == 0 {
            return Err(BolotoError::validation("frame delay must be > 0 ms"));
        }
        let g = gcd(1000, ms);
        Self::new(1000 / g, ms / g)
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas with the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size in the floating-point units the figures are drawn in.
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
