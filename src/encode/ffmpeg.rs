use super::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{BolotoError, BolotoResult};
use crate::render::backend::FrameRGBA;
use std::ffi::OsString;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

/// Options for [`FfmpegSink`] MP4 output.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output MP4 file path.
    pub out_path: PathBuf,
    /// Replace `out_path` if it already exists.
    pub overwrite: bool,
}

impl FfmpegSinkOpts {
    /// Options that write (and replace) `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Streams frames as opaque RGBA into a system `ffmpeg`, producing an H.264 MP4.
///
/// Every show frame is fully covered by its backdrop, so the sink drops alpha by forcing it to
/// 255 rather than compositing over a background.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    encoder: Option<Encoder>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    opaque: Vec<u8>,
}

/// A running `ffmpeg` child and the thread collecting its stderr.
struct Encoder {
    child: Child,
    stdin: Option<ChildStdin>,
    stderr: JoinHandle<std::io::Result<Vec<u8>>>,
}

impl FfmpegSink {
    /// Create a sink; `ffmpeg` is spawned on `begin`.
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            cfg: None,
            last_idx: None,
            opaque: Vec::new(),
        }
    }

    fn check_config(cfg: &SinkConfig) -> BolotoResult<()> {
        if cfg.fps.num == 0 || cfg.fps.den == 0 {
            return Err(BolotoError::validation("fps must be non-zero"));
        }
        if cfg.width == 0 || cfg.height == 0 {
            return Err(BolotoError::validation("mp4 frame size must be non-zero"));
        }
        // yuv420p subsamples chroma 2x2.
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            return Err(BolotoError::validation(format!(
                "mp4 frame size must be even, got {}x{}",
                cfg.width, cfg.height
            )));
        }
        Ok(())
    }
}

/// Command line for one encode: raw opaque RGBA on stdin at the show's rational rate.
fn encoder_args(cfg: &SinkConfig, opts: &FfmpegSinkOpts) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    let mut push = |s: &str| args.push(s.into());
    push(if opts.overwrite { "-y" } else { "-n" });
    for s in ["-loglevel", "error", "-f", "rawvideo", "-pix_fmt", "rgba"] {
        push(s);
    }
    push("-s");
    push(format!("{}x{}", cfg.width, cfg.height).as_str());
    push("-r");
    push(format!("{}/{}", cfg.fps.num, cfg.fps.den).as_str());
    for s in [
        "-i",
        "pipe:0",
        "-an",
        "-c:v",
        "libx264",
        "-pix_fmt",
        "yuv420p",
        "-movflags",
        "+faststart",
    ] {
        push(s);
    }
    args.push(opts.out_path.clone().into_os_string());
    args
}

impl Encoder {
    fn spawn(args: Vec<OsString>) -> BolotoResult<Self> {
        let mut child = Command::new("ffmpeg")
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| BolotoError::encode(format!("failed to spawn ffmpeg: {e}")))?;

        let stdin = child.stdin.take();
        let Some(mut err) = child.stderr.take() else {
            return Err(BolotoError::encode("ffmpeg stderr was not captured"));
        };
        let stderr = std::thread::spawn(move || {
            let mut buf = Vec::new();
            err.read_to_end(&mut buf)?;
            Ok(buf)
        });
        Ok(Self {
            child,
            stdin,
            stderr,
        })
    }

    fn write(&mut self, bytes: &[u8]) -> BolotoResult<()> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| BolotoError::encode("ffmpeg stdin is closed"))?;
        stdin
            .write_all(bytes)
            .map_err(|e| BolotoError::encode(format!("write to ffmpeg failed: {e}")))
    }

    /// Close stdin, wait for the encode to finish and surface ffmpeg's own error text.
    fn finish(mut self) -> BolotoResult<()> {
        drop(self.stdin.take());
        let status = self
            .child
            .wait()
            .map_err(|e| BolotoError::encode(format!("failed to wait for ffmpeg: {e}")))?;
        let log = self
            .stderr
            .join()
            .map_err(|_| BolotoError::encode("ffmpeg stderr reader panicked"))?
            .map_err(|e| BolotoError::encode(format!("reading ffmpeg stderr failed: {e}")))?;
        if status.success() {
            return Ok(());
        }
        Err(BolotoError::encode(format!(
            "ffmpeg exited with {status}: {}",
            String::from_utf8_lossy(&log).trim()
        )))
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> BolotoResult<()> {
        Self::check_config(&cfg)?;

        let out = &self.opts.out_path;
        ensure_parent_dir(out)?;
        if !self.opts.overwrite && out.exists() {
            return Err(BolotoError::validation(format!(
                "output file '{}' already exists",
                out.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(BolotoError::encode(
                "ffmpeg is required for MP4 output but was not found on PATH",
            ));
        }

        tracing::debug!(out = %out.display(), w = cfg.width, h = cfg.height, "spawning ffmpeg");
        self.encoder = Some(Encoder::spawn(encoder_args(&cfg, &self.opts))?);
        self.opaque = vec![0u8; cfg.width as usize * cfg.height as usize * 4];
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> BolotoResult<()> {
        let (Some(cfg), Some(encoder)) = (self.cfg.as_ref(), self.encoder.as_mut()) else {
            return Err(BolotoError::encode("ffmpeg sink not started"));
        };
        if self.last_idx.is_some_and(|last| idx.0 <= last.0) {
            return Err(BolotoError::encode(format!(
                "frame {} arrived out of order",
                idx.0
            )));
        }
        if (frame.width, frame.height) != (cfg.width, cfg.height) {
            return Err(BolotoError::validation(format!(
                "frame is {}x{}, sink expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        opaque_rgba8(&mut self.opaque, &frame.data)?;
        encoder.write(&self.opaque)?;
        self.last_idx = Some(idx);
        Ok(())
    }

    fn end(&mut self) -> BolotoResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| BolotoError::encode("ffmpeg sink not started"))?;
        self.cfg = None;
        encoder.finish()
    }
}

/// Copy `src` into `dst` with every alpha byte set to 255.
fn opaque_rgba8(dst: &mut [u8], src: &[u8]) -> BolotoResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(BolotoError::validation(
            "frame data length does not match width*height*4",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        d[..3].copy_from_slice(&s[..3]);
        d[3] = 255;
    }
    Ok(())
}

/// Return `true` when `ffmpeg -version` runs successfully.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}
