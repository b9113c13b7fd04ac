use crate::anim::host::FrameHost;
use crate::anim::state::AnimationState;
use crate::figure::Figure;
use crate::foundation::core::{FrameIndex, TickRange};
use crate::foundation::error::BolotoResult;
use crate::scene::Backdrop;
use crate::surface::Surface;
use std::time::Duration;

/// Pacing delay between frames of every built-in act.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(300);

/// A scene whose content is a pure function of the leader state.
pub trait Animation {
    /// State at the first tick.
    fn start(&self) -> AnimationState;

    /// Ticks to render, inclusive.
    fn ticks(&self) -> TickRange;

    /// Pause between presented frames.
    fn frame_delay(&self) -> Duration {
        DEFAULT_FRAME_DELAY
    }

    /// Background redrawn at the start of every frame.
    fn backdrop(&self) -> &Backdrop;

    /// Creatures for `state`, in drawing order.
    fn figures(&self, state: &AnimationState) -> Vec<Figure>;

    /// Backdrop first, then every figure.
    fn draw(&self, state: &AnimationState, surface: &mut dyn Surface) {
        self.backdrop().draw(surface);
        for figure in self.figures(state) {
            figure.draw(surface);
        }
    }
}

/// Outcome of [`AnimationDriver::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames presented by this run.
    pub frames: u64,
    /// Sum of the pacing delays requested from the host.
    pub paced: Duration,
}

/// Owns the leader state and steps it through an [`Animation`]'s ticks.
pub struct AnimationDriver<A> {
    animation: A,
    start: AnimationState,
    state: AnimationState,
}

impl<A: Animation> AnimationDriver<A> {
    /// Driver positioned on the animation's first tick.
    pub fn new(animation: A) -> Self {
        let mut start = animation.start();
        let first = animation.ticks().first.0;
        if start.tick < first {
            start = start.advanced(first - start.tick);
        }
        Self {
            animation,
            start,
            state: start,
        }
    }

    /// The driven animation.
    pub fn animation(&self) -> &A {
        &self.animation
    }

    /// Current leader state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// `true` once every tick has been presented.
    pub fn is_finished(&self) -> bool {
        self.state.tick > self.animation.ticks().last.0
    }

    /// Leader state on `tick`, reached by stepping the start state. Ticks before the start
    /// clamp to the start state.
    pub fn state_at(&self, tick: FrameIndex) -> AnimationState {
        self.start.advanced(tick.0.saturating_sub(self.start.tick))
    }

    /// Draw the frame for `tick` without touching the driver's own state.
    pub fn draw_at(&self, tick: FrameIndex, surface: &mut dyn Surface) {
        let state = self.state_at(tick);
        self.animation.draw(&state, surface);
    }

    /// Present every remaining tick: begin, draw, present, pace, advance.
    ///
    /// A finished driver presents nothing.
    #[tracing::instrument(skip_all, fields(first = self.state.tick, last = self.animation.ticks().last.0))]
    pub fn run(&mut self, host: &mut dyn FrameHost) -> BolotoResult<RunStats> {
        let last = self.animation.ticks().last.0;
        let delay = self.animation.frame_delay();
        let mut stats = RunStats::default();

        while self.state.tick <= last {
            let idx = self.state.frame();
            host.begin_frame(idx)?;
            self.animation.draw(&self.state, host.surface());
            host.present_frame(idx)?;
            tracing::debug!(
                tick = idx.0,
                x = self.state.position.x,
                y = self.state.position.y,
                "frame presented"
            );
            host.sleep(delay);
            stats.paced += delay;
            stats.frames += 1;
            self.state.advance();
        }

        tracing::info!(frames = stats.frames, "animation finished");
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/driver.rs"]
mod tests;
