//! JSON show description: canvas, pacing and which act to play.

use crate::anim::acts::{Act, FrogSwim, SnailParade, Tableau};
use crate::anim::driver::{Animation, DEFAULT_FRAME_DELAY};
use crate::anim::state::AnimationState;
use crate::figure::Figure;
use crate::foundation::core::{Canvas, TickRange};
use crate::foundation::error::{BolotoError, BolotoResult};
use crate::scene::Backdrop;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Highest `last_tick` a show may ask for; every tick is stepped through, so this bounds run time.
pub const MAX_LAST_TICK: u64 = u32::MAX as u64;

fn default_frame_delay_ms() -> u64 {
    DEFAULT_FRAME_DELAY.as_millis() as u64
}

/// A complete, playable show.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Show {
    /// Output size.
    #[serde(default)]
    pub canvas: Canvas,
    /// Pause between frames in milliseconds; also fixes the output frame rate.
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,
    /// What is played.
    pub act: Act,
}

impl Show {
    /// Show playing `act` on the default canvas and pacing.
    pub fn new(act: Act) -> Self {
        Self {
            canvas: Canvas::default(),
            frame_delay_ms: default_frame_delay_ms(),
            act,
        }
    }

    /// A frog swimming across the pond.
    pub fn frog_swim() -> Self {
        Self::new(Act::FrogSwim(FrogSwim::default()))
    }

    /// A line of snails with a frog paddling nearby.
    pub fn snail_parade() -> Self {
        Self::new(Act::SnailParade(SnailParade::default()))
    }

    /// Every creature in one still frame.
    pub fn tableau() -> Self {
        Self::new(Act::Tableau(Tableau::default()))
    }

    /// Built-in show by name: `frog`, `snails` or `tableau`.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "frog" => Some(Self::frog_swim()),
            "snails" => Some(Self::snail_parade()),
            "tableau" => Some(Self::tableau()),
            _ => None,
        }
    }

    /// Parse a show from JSON. The result is not validated yet.
    pub fn from_reader<R: std::io::Read>(r: R) -> BolotoResult<Self> {
        serde_json::from_reader(r).map_err(|e| BolotoError::serde(format!("parse show JSON: {e}")))
    }

    /// Parse a show from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BolotoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BolotoError::validation(format!("open show JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject shows that cannot be rendered.
    pub fn validate(&self) -> BolotoResult<()> {
        let Canvas { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(BolotoError::validation("canvas width/height must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(BolotoError::validation(format!(
                "canvas {width}x{height} exceeds the rasterizer limit of {}",
                u16::MAX
            )));
        }
        if self.frame_delay_ms == 0 {
            return Err(BolotoError::validation("frame_delay_ms must be > 0"));
        }
        if u32::try_from(self.frame_delay_ms).is_err() {
            return Err(BolotoError::validation("frame_delay_ms is too large"));
        }
        let last_tick = self.act.ticks().last.0;
        if last_tick > MAX_LAST_TICK {
            return Err(BolotoError::validation(format!(
                "last_tick {last_tick} exceeds the limit of {MAX_LAST_TICK}"
            )));
        }
        if let Act::SnailParade(parade) = &self.act {
            if parade.chain.len == 0 {
                return Err(BolotoError::validation("snail chain needs at least one member"));
            }
            if !(parade.chain.shrink.is_finite() && parade.chain.spacing.is_finite()) {
                return Err(BolotoError::validation(
                    "snail chain shrink/spacing must be finite",
                ));
            }
        }
        Ok(())
    }
}

impl Animation for Show {
    fn start(&self) -> AnimationState {
        self.act.start()
    }

    fn ticks(&self) -> TickRange {
        self.act.ticks()
    }

    fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    fn backdrop(&self) -> &Backdrop {
        self.act.backdrop()
    }

    fn figures(&self, state: &AnimationState) -> Vec<Figure> {
        self.act.figures(state)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/show.rs"]
mod tests;
