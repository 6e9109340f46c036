use std::path::{Path, PathBuf};

use crate::codec::is_extractable;
use crate::error::{ExtractError, Result};
use crate::ffmpeg_utils::demux::FfmpegPacketSource;
use crate::output::{generate_output_path, OutputNames};
use crate::pipeline::extract_to_path;
use crate::types::SubtitleTrack;

pub use crate::index::probe_file;

/// A successfully written script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTrack {
    pub path: PathBuf,
    pub events: usize,
}

/// Result of one track in a batch extraction
#[derive(Debug)]
pub struct TrackOutcome {
    pub track: SubtitleTrack,
    pub result: Result<ExtractedTrack>,
}

/// Where the script for `video` goes: `output_dir` if given, else next to the video.
fn naming_base(video: &Path, output_dir: Option<&Path>) -> PathBuf {
    match (output_dir, video.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => video.to_path_buf(),
    }
}

/// Extract one subtitle track of `video` to an ASS file.
///
/// `names` carries the output paths already used in this batch.
pub fn extract_track(
    video: &Path,
    track: &SubtitleTrack,
    output_dir: Option<&Path>,
    names: &mut OutputNames,
) -> Result<ExtractedTrack> {
    if !is_extractable(&track.codec_id) {
        return Err(ExtractError::UnsupportedCodec(track.codec_id.clone()));
    }

    let mut source = FfmpegPacketSource::open(video, &[track.stream_index])?;
    let header = source.header(track.stream_index)?;

    let path = generate_output_path(&naming_base(video, output_dir), track, names);
    tracing::debug!(
        "Extracting stream {} ({}) of {:?} to {:?}",
        track.stream_index,
        track.codec_id,
        video,
        path
    );

    let events = extract_to_path(
        &mut source,
        track.stream_index,
        &track.codec_id,
        &header,
        &path,
    )?;

    Ok(ExtractedTrack { path, events })
}

/// Extract several tracks, continuing past failures.
///
/// Output names are de-duplicated across the whole batch. `on_done` is called
/// after each track, in order, with its outcome.
pub fn extract_tracks<F>(
    video: &Path,
    tracks: &[SubtitleTrack],
    output_dir: Option<&Path>,
    mut on_done: F,
) -> Vec<TrackOutcome>
where
    F: FnMut(&TrackOutcome),
{
    let mut names = OutputNames::new();

    tracks
        .iter()
        .map(|track| {
            let result = extract_track(video, track, output_dir, &mut names);
            if let Err(e) = &result {
                tracing::warn!("Track {} ({}) failed: {}", track.index, track.format_type, e);
            }
            let outcome = TrackOutcome {
                track: track.clone(),
                result,
            };
            on_done(&outcome);
            outcome
        })
        .collect()
}
