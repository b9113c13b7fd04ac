use crate::foundation::core::{FrameIndex, Point, Vec2};

/// Leader position and clock, the only state that survives from one frame to the next.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationState {
    /// Leader anchor in screen coordinates.
    pub position: Point,
    /// Current tick.
    pub tick: u64,
    /// Displacement applied on every tick.
    pub velocity: Vec2,
}

impl AnimationState {
    /// State at tick 0.
    pub fn new(position: Point, velocity: Vec2) -> Self {
        Self {
            position,
            tick: 0,
            velocity,
        }
    }

    /// Move by one velocity step and count the tick.
    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.tick += 1;
    }

    /// Copy of this state `n` ticks later.
    pub fn advanced(mut self, n: u64) -> Self {
        // Stepwise so the result matches the driver's accumulation bit for bit.
        for _ in 0..n {
            self.advance();
        }
        self
    }

    /// `-1.0` when moving left, `1.0` otherwise.
    pub fn facing(&self) -> f64 {
        if self.velocity.x < 0.0 { -1.0 } else { 1.0 }
    }

    /// Current tick as a frame index.
    pub fn frame(&self) -> FrameIndex {
        FrameIndex(self.tick)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/state.rs"]
mod tests;
