#[cfg(feature = "ffmpeg")]
pub(crate) mod api;
pub(crate) mod assout;
pub(crate) mod codec;
pub(crate) mod error;
#[cfg(feature = "ffmpeg")]
pub(crate) mod ffmpeg_utils;
pub(crate) mod format;
#[cfg(feature = "ffmpeg")]
pub(crate) mod index;
pub(crate) mod language;
pub(crate) mod output;
pub(crate) mod pipeline;
pub(crate) mod subtitle;
pub(crate) mod types;

#[cfg(test)]
pub(crate) mod tests;

#[cfg(feature = "ffmpeg")]
pub use api::*;
pub use assout::{
    convert_ssa_header, default_header, ssa_alignment_to_ass, write_passthrough,
    write_synthesized, EVENTS_FORMAT,
};
pub use codec::{classify_codec, is_extractable, CodecFamily};
pub use error::{BlockError, ExtractError, FfmpegError, Result};
#[cfg(feature = "ffmpeg")]
pub use ffmpeg_utils::demux::FfmpegPacketSource;
#[cfg(feature = "ffmpeg")]
pub use ffmpeg_utils::version_info as ffmpeg_version_info;
#[cfg(feature = "ffmpeg")]
pub use ffmpeg_utils::{init, install_log_filter};
pub use format::{format_duration, format_file_size};
pub use language::resolve_language_name;
pub use output::{generate_output_path, sanitize_file_name, OutputNames};
pub use pipeline::{
    collect_packets, extract_to_path, write_script, PacketSource, SourcePacket,
    TIMESTAMP_SANITY_THRESHOLD_NS,
};
pub use subtitle::{decode_events, format_timestamp, gap_fill, translate_tags};
pub use types::{FileInfo, MediaInfo, RawPacket, SubtitleEvent, SubtitleTrack};
