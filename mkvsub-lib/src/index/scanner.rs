//! File scanner - builds the subtitle track inventory of a media file
//!
//! Only the container header is parsed; nothing is demuxed.

use std::path::Path;

use ffmpeg_next as ffmpeg;

use crate::error::Result;
use crate::ffmpeg_utils::context::InputContext;
use crate::types::{FileInfo, MediaInfo};

use super::analyze_subtitle_stream;

/// Probe a media file for its subtitle tracks.
pub fn probe_file<P: AsRef<Path>>(path: P) -> Result<MediaInfo> {
    let path = path.as_ref();
    let file_size = std::fs::metadata(path)?.len();
    let context = InputContext::open(path)?;

    let mut tracks = Vec::new();
    for stream in context.streams() {
        let medium = stream.parameters().medium();
        if medium != ffmpeg::media::Type::Subtitle {
            tracing::trace!("Skipping stream {} (type={:?})", stream.index(), medium);
            continue;
        }

        let track = analyze_subtitle_stream(&stream, tracks.len() + 1);
        tracing::debug!(
            "Found subtitle stream {}: codec={}, language={:?}, extractable={}",
            track.stream_index,
            track.codec_id,
            track.language,
            track.is_extractable
        );
        tracks.push(track);
    }

    let info = FileInfo {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        file_size,
        duration: context.duration(),
        subtitle_count: tracks.len(),
        text_sub_count: tracks.iter().filter(|t| t.is_extractable).count(),
    };

    tracing::debug!(
        "Probed {:?}: {} subtitle tracks, {} extractable",
        path,
        info.subtitle_count,
        info.text_sub_count
    );

    Ok(MediaInfo { info, tracks })
}
