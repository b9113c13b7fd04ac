use crate::encode::sink::FrameSink;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::BolotoResult;
use crate::render::cpu::{CpuBackend, CpuBackendOpts};
use crate::surface::Surface;
use crate::surface::display_list::DisplayList;
use std::time::Duration;

/// Presentation side of the tick loop: an off-screen surface that is shown as a whole once the
/// frame is complete.
pub trait FrameHost {
    /// Start a new frame; the surface is empty afterwards.
    fn begin_frame(&mut self, tick: FrameIndex) -> BolotoResult<()>;
    /// Off-screen surface for the frame being built.
    fn surface(&mut self) -> &mut dyn Surface;
    /// Show the finished frame.
    fn present_frame(&mut self, tick: FrameIndex) -> BolotoResult<()>;
    /// Pace the loop between frames.
    fn sleep(&mut self, delay: Duration);
}

/// Whether [`FrameHost::sleep`] actually waits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pacing {
    /// Produce frames as fast as possible.
    #[default]
    Offline,
    /// Sleep for the frame delay between frames.
    Realtime,
}

/// Host that keeps every presented display list; never sleeps.
#[derive(Debug)]
pub struct RecordingHost {
    current: DisplayList,
    frames: Vec<(FrameIndex, DisplayList)>,
    slept: Duration,
}

impl RecordingHost {
    /// Empty host drawing onto `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            current: DisplayList::new(canvas),
            frames: Vec::new(),
            slept: Duration::ZERO,
        }
    }

    /// Presented frames in presentation order.
    pub fn frames(&self) -> &[(FrameIndex, DisplayList)] {
        &self.frames
    }

    /// Sum of all requested pacing delays.
    pub fn slept(&self) -> Duration {
        self.slept
    }
}

impl FrameHost for RecordingHost {
    fn begin_frame(&mut self, _tick: FrameIndex) -> BolotoResult<()> {
        self.current.clear();
        Ok(())
    }

    fn surface(&mut self) -> &mut dyn Surface {
        &mut self.current
    }

    fn present_frame(&mut self, tick: FrameIndex) -> BolotoResult<()> {
        self.frames.push((tick, self.current.clone()));
        Ok(())
    }

    fn sleep(&mut self, delay: Duration) {
        self.slept += delay;
    }
}

/// Host that rasterizes each finished display list on the CPU and hands the pixels to a sink.
pub struct RasterHost<'a> {
    list: DisplayList,
    backend: CpuBackend,
    sink: &'a mut dyn FrameSink,
    pacing: Pacing,
}

impl<'a> RasterHost<'a> {
    /// Host drawing onto `canvas` and streaming into `sink`.
    ///
    /// The caller owns the sink lifecycle (`begin`/`end`).
    pub fn new(
        canvas: Canvas,
        opts: CpuBackendOpts,
        sink: &'a mut dyn FrameSink,
        pacing: Pacing,
    ) -> Self {
        Self {
            list: DisplayList::new(canvas),
            backend: CpuBackend::new(opts),
            sink,
            pacing,
        }
    }
}

impl FrameHost for RasterHost<'_> {
    fn begin_frame(&mut self, _tick: FrameIndex) -> BolotoResult<()> {
        self.list.clear();
        Ok(())
    }

    fn surface(&mut self) -> &mut dyn Surface {
        &mut self.list
    }

    fn present_frame(&mut self, tick: FrameIndex) -> BolotoResult<()> {
        let frame = self.backend.render(&self.list)?;
        self.sink.push_frame(tick, &frame)
    }

    fn sleep(&mut self, delay: Duration) {
        if self.pacing == Pacing::Realtime {
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/host.rs"]
mod tests;
