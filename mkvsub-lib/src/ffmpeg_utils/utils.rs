//! FFmpeg utility functions

use ffmpeg_next as ffmpeg;

/// Nanosecond time base used throughout the extraction pipeline
pub const NANOSECONDS: ffmpeg::Rational = ffmpeg::Rational(1, 1_000_000_000);

/// Convert timestamps from one timebase to another
pub fn rescale_ts(ts: i64, from: ffmpeg::Rational, to: ffmpeg::Rational) -> i64 {
    unsafe { ffmpeg::ffi::av_rescale_q(ts, from.into(), to.into()) }
}

/// Convert a stream timestamp to nanoseconds, clamping negatives to zero.
pub fn ts_to_nanos(ts: i64, time_base: ffmpeg::Rational) -> u64 {
    rescale_ts(ts, time_base, NANOSECONDS).max(0) as u64
}

/// Extract language from stream metadata
pub fn get_stream_language(stream: &ffmpeg::Stream) -> Option<String> {
    stream.metadata().get("language").map(|s| s.to_string())
}

/// Get the title from stream metadata
pub fn get_stream_title(stream: &ffmpeg::Stream) -> Option<String> {
    stream.metadata().get("title").map(|s| s.to_string())
}

/// Map an FFmpeg subtitle codec to its Matroska codec id.
///
/// FFmpeg decodes both `S_TEXT/ASS` and `S_TEXT/SSA` as `ASS`, so the style
/// sheet decides between them. Codecs with no Matroska id get FFmpeg's name.
pub fn matroska_codec_id(codec_id: ffmpeg::codec::Id, header: &str) -> String {
    use ffmpeg::codec::Id;

    let id = match codec_id {
        Id::ASS | Id::SSA if crate::assout::is_legacy_header(header) => "S_TEXT/SSA",
        Id::ASS => "S_TEXT/ASS",
        Id::SSA => "S_TEXT/SSA",
        Id::SUBRIP | Id::TEXT => "S_TEXT/UTF8",
        Id::WEBVTT => "S_TEXT/WEBVTT",
        Id::HDMV_PGS_SUBTITLE => "S_HDMV/PGS",
        Id::DVD_SUBTITLE => "S_VOBSUB",
        Id::DVB_SUBTITLE => "S_DVBSUB",
        Id::HDMV_TEXT_SUBTITLE => "S_HDMV/TEXTST",
        other => return other.name().to_string(),
    };
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_to_nanos() {
        let ms = ffmpeg::Rational::new(1, 1000);
        assert_eq!(ts_to_nanos(1_500, ms), 1_500_000_000);
        assert_eq!(ts_to_nanos(-20, ms), 0);
    }

    #[test]
    fn test_matroska_codec_id() {
        use ffmpeg::codec::Id;
        assert_eq!(matroska_codec_id(Id::SUBRIP, ""), "S_TEXT/UTF8");
        assert_eq!(matroska_codec_id(Id::ASS, "[V4+ Styles]"), "S_TEXT/ASS");
        assert_eq!(matroska_codec_id(Id::ASS, "[V4 Styles]\n"), "S_TEXT/SSA");
        assert_eq!(matroska_codec_id(Id::HDMV_PGS_SUBTITLE, ""), "S_HDMV/PGS");
        assert_eq!(matroska_codec_id(Id::DVD_SUBTITLE, ""), "S_VOBSUB");
    }
}
