//! Playing a [`Show`] into pixels.

use crate::anim::driver::{Animation, AnimationDriver};
use crate::anim::host::{Pacing, RasterHost};
use crate::config::Show;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{BolotoError, BolotoResult};
use crate::render::backend::FrameRGBA;
use crate::render::cpu::{CpuBackend, CpuBackendOpts};
use crate::surface::display_list::DisplayList;
use std::time::Duration;

/// Counters for one [`ShowSession::render_all`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed into the sink.
    pub frames: u64,
    /// Pacing requested between frames; only waited for under [`Pacing::Realtime`].
    pub paced: Duration,
}

/// A validated show ready to be rendered whole or one tick at a time.
pub struct ShowSession {
    show: Show,
    backend_opts: CpuBackendOpts,
}

impl ShowSession {
    /// Validate `show` and wrap it in a session.
    pub fn new(show: Show) -> BolotoResult<Self> {
        show.validate()?;
        Ok(Self {
            show,
            backend_opts: CpuBackendOpts::default(),
        })
    }

    /// Replace the rasterizer options.
    pub fn with_backend_opts(mut self, opts: CpuBackendOpts) -> Self {
        self.backend_opts = opts;
        self
    }

    /// The show being played.
    pub fn show(&self) -> &Show {
        &self.show
    }

    /// Sink configuration implied by the show's canvas and pacing.
    pub fn sink_config(&self) -> BolotoResult<SinkConfig> {
        Ok(SinkConfig {
            width: self.show.canvas.width,
            height: self.show.canvas.height,
            fps: Fps::from_frame_delay(self.show.frame_delay())?,
        })
    }

    /// Play every tick into `sink`, which is begun and ended here.
    #[tracing::instrument(skip_all, fields(pacing = ?pacing))]
    pub fn render_all(
        &self,
        sink: &mut dyn FrameSink,
        pacing: Pacing,
    ) -> BolotoResult<RenderStats> {
        let cfg = self.sink_config()?;
        sink.begin(cfg)?;

        let mut driver = AnimationDriver::new(self.show.clone());
        let run = {
            let mut host = RasterHost::new(self.show.canvas, self.backend_opts, sink, pacing);
            driver.run(&mut host)
        };
        let stats = match run {
            Ok(stats) => stats,
            Err(e) => {
                if let Err(end_err) = sink.end() {
                    tracing::warn!(error = %end_err, "sink did not finish cleanly");
                }
                return Err(e);
            }
        };
        sink.end()?;

        tracing::info!(frames = stats.frames, "show rendered");
        Ok(RenderStats {
            frames: stats.frames,
            paced: stats.paced,
        })
    }

    /// Rasterize the frame of a single `tick`.
    #[tracing::instrument(skip(self))]
    pub fn render_tick(&self, tick: FrameIndex) -> BolotoResult<FrameRGBA> {
        if !self.show.ticks().contains(tick) {
            return Err(BolotoError::validation(format!(
                "tick {} is outside the show's ticks {}..={}",
                tick.0,
                self.show.ticks().first.0,
                self.show.ticks().last.0
            )));
        }
        let driver = AnimationDriver::new(self.show.clone());
        let mut list = DisplayList::new(self.show.canvas);
        driver.draw_at(tick, &mut list);
        CpuBackend::new(self.backend_opts).render(&list)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session/session.rs"]
mod tests;
