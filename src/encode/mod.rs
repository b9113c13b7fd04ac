//! Frame sinks.
//!
//! Sinks consume rendered frames in tick order; they stand in for the window a frame used to be
//! presented in.

/// `ffmpeg`-based MP4 sink.
pub mod ffmpeg;
/// PNG-per-frame sink.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;

use crate::foundation::error::BolotoResult;
use anyhow::Context as _;
use std::path::Path;

/// Create `dir` and any missing ancestors.
pub(crate) fn ensure_dir(dir: &Path) -> BolotoResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

/// Create the directory `path` will be written into.
pub(crate) fn ensure_parent_dir(path: &Path) -> BolotoResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}
