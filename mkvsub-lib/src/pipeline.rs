//! Track extraction pipeline: collect, gap-fill, decode, serialize.
//!
//! Everything here is independent of the demuxer; packets arrive through the
//! [`PacketSource`] trait so the whole path can be driven from memory.

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::assout::{write_passthrough, write_synthesized};
use crate::codec::CodecFamily;
use crate::error::{ExtractError, Result};
use crate::subtitle::{decode_events, gap_fill};
use crate::types::{RawPacket, SubtitleEvent};

/// Start times above this are almost certainly not real nanosecond values.
pub const TIMESTAMP_SANITY_THRESHOLD_NS: u64 = 10_000_000_000_000_000;

/// One demuxed packet, tagged with the stream it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePacket {
    /// Demuxer stream index
    pub track: usize,
    pub start_ns: u64,
    /// 0 when the container gave no duration
    pub end_ns: u64,
    pub payload: Vec<u8>,
}

/// A sequential packet stream over every track of one file.
pub trait PacketSource {
    /// Next packet in demux order. `Ok(None)` marks end of stream; `Err` is a
    /// read failure.
    fn next_packet(&mut self) -> Result<Option<SourcePacket>>;
}

/// Drain `source`, keep the packets of `track`, and gap-fill them.
pub fn collect_packets<S: PacketSource + ?Sized>(
    source: &mut S,
    track: usize,
) -> Result<Vec<RawPacket>> {
    let mut packets = Vec::new();

    while let Some(pkt) = source.next_packet()? {
        if pkt.track != track {
            continue;
        }

        if packets.is_empty() && pkt.start_ns > TIMESTAMP_SANITY_THRESHOLD_NS {
            tracing::warn!(
                "First packet of stream {} starts at {} ns, above the sanity threshold ({} ns); \
                 timestamps may be mis-encoded",
                track,
                pkt.start_ns,
                TIMESTAMP_SANITY_THRESHOLD_NS
            );
        }

        packets.push(RawPacket::new(pkt.start_ns, pkt.end_ns, pkt.payload));
    }

    gap_fill(&mut packets);

    tracing::debug!("Collected {} packets for stream {}", packets.len(), track);

    Ok(packets)
}

/// Serialize events for a codec: passthrough for ASS/SSA, synthesized header for SubRip.
pub fn write_script<W: Write>(
    w: &mut W,
    codec_id: &str,
    header: &str,
    events: &[SubtitleEvent],
) -> Result<()> {
    match CodecFamily::from_codec_id(codec_id) {
        Some(CodecFamily::Structured) => write_passthrough(w, header, events),
        Some(CodecFamily::PlainText) => write_synthesized(w, events),
        None => Err(ExtractError::UnsupportedCodec(codec_id.to_string())),
    }
}

/// Extract one track from `source` into an ASS file at `path`.
///
/// The script is written to a temporary file in the destination directory and
/// moved into place only once complete. On any failure nothing is left at
/// `path` and the temporary file is removed. Returns the number of events.
pub fn extract_to_path<S: PacketSource + ?Sized>(
    source: &mut S,
    track: usize,
    codec_id: &str,
    header: &str,
    path: &Path,
) -> Result<usize> {
    if CodecFamily::from_codec_id(codec_id).is_none() {
        return Err(ExtractError::UnsupportedCodec(codec_id.to_string()));
    }

    let packets = collect_packets(source, track)?;
    let events = decode_events(&packets, codec_id)?;
    drop(packets);

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let tmp = tempfile::NamedTempFile::new_in(dir).map_err(ExtractError::write("temporary file"))?;

    {
        let mut w = BufWriter::new(tmp.as_file());
        write_script(&mut w, codec_id, header, &events)?;
        w.flush().map_err(ExtractError::write("flush"))?;
    }

    // Temp files are created 0600; give the script normal file permissions
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(ExtractError::write("permissions"))?;
    }

    tmp.persist(path)
        .map_err(|e| ExtractError::write("final rename")(e.error))?;

    tracing::info!(
        "Extracted {} events from stream {} ({}) to {:?}",
        events.len(),
        track,
        codec_id,
        path
    );

    Ok(events.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::MemorySource;

    #[test]
    fn test_collect_filters_track_and_fills() {
        let mut source = MemorySource::new(vec![
            (1, 3_000, 0, "c"),
            (0, 999, 0, "other track"),
            (1, 1_000, 0, "a"),
            (1, 2_000, 2_500, "b"),
        ]);
        let packets = collect_packets(&mut source, 1).unwrap();
        let spans: Vec<(u64, u64)> = packets.iter().map(|p| (p.start_time, p.end_time)).collect();
        assert_eq!(
            spans,
            vec![(1_000, 2_000), (2_000, 2_500), (3_000, 3_000 + 5_000_000_000)]
        );
    }

    #[test]
    fn test_collect_propagates_read_error() {
        let mut source = MemorySource::new(vec![(0, 0, 10, "a")]).fail_after(1);
        let err = collect_packets(&mut source, 0).unwrap_err();
        assert!(matches!(err, ExtractError::PacketRead(_)));
    }

    #[test]
    fn test_write_script_rejects_unsupported() {
        let mut out = Vec::new();
        let err = write_script(&mut out, "S_HDMV/PGS", "", &[]).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedCodec(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_script_dispatch() {
        let mut srt = Vec::new();
        write_script(&mut srt, "S_TEXT/UTF8", "ignored", &[]).unwrap();
        assert!(String::from_utf8(srt).unwrap().contains("Microsoft YaHei"));

        let mut ass = Vec::new();
        write_script(&mut ass, "S_TEXT/ASS", "[Script Info]\n", &[]).unwrap();
        let ass = String::from_utf8(ass).unwrap();
        assert!(ass.starts_with("[Script Info]\r\n\r\n[Events]\r\n"));
    }

    #[test]
    fn test_extract_to_path_malformed_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("movie.eng.ass");
        let mut source = MemorySource::new(vec![(0, 0, 10, "not a block")]);

        let err = extract_to_path(&mut source, 0, "S_TEXT/ASS", "", &out).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedPacket { index: 0, .. }));
        assert!(!out.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
