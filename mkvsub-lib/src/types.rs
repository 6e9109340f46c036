use serde::Serialize;
use std::time::Duration;

/// One demuxed subtitle unit for a single track, before codec-specific parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPacket {
    /// Start time in nanoseconds
    pub start_time: u64,
    /// End time in nanoseconds; 0 (or anything <= start) means unknown
    pub end_time: u64,
    /// Raw block data
    pub payload: Vec<u8>,
}

impl RawPacket {
    pub fn new(start_time: u64, end_time: u64, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            start_time,
            end_time,
            payload: payload.into(),
        }
    }
}

/// A single dialogue line, independent of the source codec.
///
/// Margins are kept as the original text since they are re-emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEvent {
    /// Start time in nanoseconds
    pub start: u64,
    /// End time in nanoseconds
    pub end: u64,
    pub layer: i32,
    pub style: String,
    /// Speaker (the ASS "Name" column)
    pub name: String,
    pub margin_l: String,
    pub margin_r: String,
    pub margin_v: String,
    pub effect: String,
    /// Render-ready text, may contain override tags
    pub text: String,
    /// Secondary sort key for events sharing a start time
    pub read_order: i64,
}

impl SubtitleEvent {
    /// An event with the default style and zero margins, as produced for plain-text sources.
    pub fn plain(start: u64, end: u64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            layer: 0,
            style: "Default".to_string(),
            name: String::new(),
            margin_l: "0".to_string(),
            margin_r: "0".to_string(),
            margin_v: "0".to_string(),
            effect: String::new(),
            text: text.into(),
            read_order: 0,
        }
    }
}

/// Metadata for a single subtitle track
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtitleTrack {
    /// Demuxer stream index, the real identifier used to select packets
    pub stream_index: usize,
    /// 1-based sequential index used in listings and on the command line
    pub index: usize,
    /// Raw language code from the container, e.g. "eng", "jpn"
    pub language: String,
    /// Resolved human-readable language name
    pub language_name: String,
    /// Human-readable format: "SRT", "ASS", "PGS", ...
    pub format_type: String,
    /// Matroska codec id, e.g. "S_TEXT/UTF8"
    pub codec_id: String,
    /// Track title, may be empty
    pub name: String,
    pub is_default: bool,
    pub is_forced: bool,
    pub is_text: bool,
    pub is_extractable: bool,
}

/// Basic file metadata for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub file_name: String,
    /// Size in bytes
    pub file_size: u64,
    #[serde(serialize_with = "serialize_duration_secs")]
    pub duration: Duration,
    /// All subtitle tracks including image-based ones
    pub subtitle_count: usize,
    /// Extractable text subtitle tracks only
    pub text_sub_count: usize,
}

/// File metadata plus every subtitle track found in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaInfo {
    pub info: FileInfo,
    pub tracks: Vec<SubtitleTrack>,
}

impl MediaInfo {
    /// Look up a track by its 1-based display index
    pub fn track_by_index(&self, index: usize) -> Option<&SubtitleTrack> {
        self.tracks.iter().find(|t| t.index == index)
    }

    pub fn extractable_tracks(&self) -> impl Iterator<Item = &SubtitleTrack> {
        self.tracks.iter().filter(|t| t.is_extractable)
    }
}

fn serialize_duration_secs<S: serde::Serializer>(
    d: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(d.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_event_defaults() {
        let ev = SubtitleEvent::plain(1, 2, "hi");
        assert_eq!(ev.style, "Default");
        assert_eq!(ev.layer, 0);
        assert_eq!(ev.margin_l, "0");
        assert_eq!(ev.margin_v, "0");
        assert!(ev.name.is_empty());
        assert!(ev.effect.is_empty());
    }

    #[test]
    fn test_track_by_index() {
        let track = SubtitleTrack {
            stream_index: 3,
            index: 1,
            language: "eng".into(),
            language_name: "English".into(),
            format_type: "SRT".into(),
            codec_id: "S_TEXT/UTF8".into(),
            name: String::new(),
            is_default: true,
            is_forced: false,
            is_text: true,
            is_extractable: true,
        };
        let media = MediaInfo {
            info: FileInfo {
                file_name: "a.mkv".into(),
                file_size: 0,
                duration: Duration::from_secs(1),
                subtitle_count: 1,
                text_sub_count: 1,
            },
            tracks: vec![track],
        };
        assert_eq!(media.track_by_index(1).map(|t| t.stream_index), Some(3));
        assert!(media.track_by_index(2).is_none());
        assert_eq!(media.extractable_tracks().count(), 1);
    }
}
