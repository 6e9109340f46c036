//! FFmpeg input context wrapper

use std::path::Path;
use std::time::Duration;

use crate::error::{FfmpegError, Result};
use ffmpeg_next as ffmpeg;
use ffmpeg_next::format::input;

/// Wrapper for FFmpeg input context
pub struct InputContext {
    inner: ffmpeg::format::context::Input,
}

impl InputContext {
    /// Open a media file for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let inner = input(&path).map_err(|e| {
            FfmpegError::OpenInput(format!("Failed to open {:?}: {}", path, e))
        })?;

        tracing::debug!("Opened input file: {:?}", path);

        Ok(Self { inner })
    }

    /// Container duration; zero when the demuxer does not know it
    pub fn duration(&self) -> Duration {
        let micros = self.inner.duration();
        if micros <= 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(micros as f64 / ffmpeg::ffi::AV_TIME_BASE as f64)
    }

    /// Iterate over all streams
    pub fn streams(&self) -> impl Iterator<Item = ffmpeg::Stream<'_>> + '_ {
        self.inner.streams().into_iter()
    }

    /// Hand over the raw context, e.g. for packet reading
    pub fn into_inner(self) -> ffmpeg::format::context::Input {
        self.inner
    }
}
