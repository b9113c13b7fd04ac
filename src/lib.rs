//! Boloto draws a small swamp: a frog, a bird and a snail built from jointed limbs and simple
//! shapes, animated one tick at a time.
//!
//! - Figures are plain values ([`FrogSpec`], [`BirdSpec`], [`SnailSpec`]) drawn through the
//!   [`Surface`] trait
//! - Gaits are data ([`Wave`], [`LimbGait`]) sampled on the tick counter
//! - An [`AnimationDriver`] steps the leader state and presents frames through a [`FrameHost`]
//! - A [`ShowSession`] plays a JSON [`Show`] into any [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Tick loop and built-in acts.
pub mod anim;
/// RGB colors and shading.
pub mod color;
/// Show configuration.
pub mod config;
/// Frame sinks.
pub mod encode;
/// Creatures and their limbs.
pub mod figure;
/// CPU rasterization.
pub mod render;
/// Background scenery.
pub mod scene;
/// Show playback.
pub mod session;
/// Drawing surface contract.
pub mod surface;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, Point, Rect, Size, TickRange, Vec2};
pub use crate::foundation::error::{BolotoError, BolotoResult};

pub use crate::anim::acts::{Act, FrogSwim, SnailParade, Tableau};
pub use crate::anim::chain::{Chain, ChainLink};
pub use crate::anim::driver::{Animation, AnimationDriver, DEFAULT_FRAME_DELAY, RunStats};
pub use crate::anim::host::{FrameHost, Pacing, RasterHost, RecordingHost};
pub use crate::anim::state::AnimationState;
pub use crate::color::Rgb;
pub use crate::config::Show;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::figure::Figure;
pub use crate::figure::bird::BirdSpec;
pub use crate::figure::frog::FrogSpec;
pub use crate::figure::gait::{FROG_SWIM, FrogGait, LimbGait, Wave, frog_paddle_in_place};
pub use crate::figure::limb::{Bone, LimbGeometry, LimbSpec, Membrane, render_limb};
pub use crate::figure::snail::SnailSpec;
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::{CpuBackend, CpuBackendOpts};
pub use crate::scene::{Backdrop, Cloud};
pub use crate::session::{RenderStats, ShowSession};
pub use crate::surface::display_list::{DisplayList, DrawOp};
pub use crate::surface::{ShapeStyle, Stroke, Surface, bbox};
