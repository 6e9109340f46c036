//! Subtitle stream analysis

use ffmpeg_next as ffmpeg;
use ffmpeg_next::format::stream::Disposition;

use crate::codec::{classify_codec, is_extractable};
use crate::ffmpeg_utils::helpers::stream_header_text;
use crate::ffmpeg_utils::utils::{get_stream_language, get_stream_title, matroska_codec_id};
use crate::language::resolve_language_name;
use crate::types::SubtitleTrack;

/// Describe a subtitle stream. `index` is the 1-based display index.
pub fn analyze_subtitle_stream(stream: &ffmpeg::Stream, index: usize) -> SubtitleTrack {
    let header = stream_header_text(stream);
    let codec_id = matroska_codec_id(stream.parameters().id(), &header);
    let (format_type, is_text) = classify_codec(&codec_id);

    let language = get_stream_language(stream).unwrap_or_default();
    let disposition = stream.disposition();

    SubtitleTrack {
        stream_index: stream.index(),
        index,
        language_name: resolve_language_name(&language),
        language,
        format_type,
        is_extractable: is_extractable(&codec_id),
        codec_id,
        name: get_stream_title(stream).unwrap_or_default(),
        is_default: disposition.contains(Disposition::DEFAULT),
        is_forced: disposition.contains(Disposition::FORCED),
        is_text,
    }
}
