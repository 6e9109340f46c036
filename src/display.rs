//! Track listing output

use mkvsub_lib::{format_duration, format_file_size, FileInfo, MediaInfo, SubtitleTrack};

/// Shown when a file has subtitle tracks but none of them are text.
pub const NO_TEXT_TRACKS: &str = "No extractable text subtitle tracks found.";

/// `[default]` is only worth showing when some track lacks it.
pub fn should_show_default(tracks: &[SubtitleTrack]) -> bool {
    tracks.iter().any(|t| !t.is_default)
}

/// Two-line file summary.
pub fn format_file_info_header(info: &FileInfo) -> String {
    format!(
        "File: {}\nSize: {} | Duration: {} | Subtitle tracks: {}",
        info.file_name,
        format_file_size(info.file_size),
        format_duration(info.duration),
        info.subtitle_count
    )
}

/// `[idx] Language (Format) "Title" CodecId [default] [forced]`
pub fn format_track_line(track: &SubtitleTrack, show_default: bool) -> String {
    let mut parts = vec![
        format!("[{}]", track.index),
        track.language_name.clone(),
        format!("({})", track.format_type),
    ];

    if !track.name.is_empty() {
        parts.push(format!("{:?}", track.name));
    }
    parts.push(track.codec_id.clone());

    if show_default && track.is_default {
        parts.push("[default]".to_string());
    }
    if track.is_forced {
        parts.push("[forced]".to_string());
    }
    if !track.is_text {
        parts.push("-- not extractable (image subtitle)".to_string());
    }

    parts.join(" ")
}

/// Short label used in the interactive selector.
pub fn format_track_option(track: &SubtitleTrack) -> String {
    let mut label = format!(
        "[{}] {} ({})",
        track.index, track.language_name, track.format_type
    );
    if !track.name.is_empty() {
        label.push_str(&format!(" {:?}", track.name));
    }
    label
}

/// File header followed by one line per track.
pub fn format_track_listing(media: &MediaInfo) -> String {
    let mut out = format_file_info_header(&media.info);
    out.push('\n');

    if media.info.subtitle_count == 0 {
        out.push_str("\nNo subtitle tracks found in this file.");
        return out;
    }

    let show_default = should_show_default(&media.tracks);
    let lines: Vec<String> = media
        .tracks
        .iter()
        .map(|t| format_track_line(t, show_default))
        .collect();
    out.push('\n');
    out.push_str(&lines.join("\n"));

    if media.info.text_sub_count == 0 {
        out.push_str("\n\n");
        out.push_str(NO_TEXT_TRACKS);
    }

    out
}

/// The probe result as pretty-printed JSON.
pub fn format_json(media: &MediaInfo) -> serde_json::Result<String> {
    serde_json::to_string_pretty(media)
}
