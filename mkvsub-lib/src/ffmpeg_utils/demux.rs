//! FFmpeg-backed [`PacketSource`]

use std::path::Path;

use ffmpeg_next as ffmpeg;

use super::context::InputContext;
use super::helpers::{stream_discard_all, stream_header_text};
use super::utils::ts_to_nanos;
use crate::error::{ExtractError, Result};
use crate::pipeline::{PacketSource, SourcePacket};

/// Reads packets from a media file in demux order.
///
/// Streams not selected at open time are discarded by the demuxer, so only
/// their packets are ever returned.
pub struct FfmpegPacketSource {
    input: ffmpeg::format::context::Input,
    time_bases: Vec<ffmpeg::Rational>,
}

impl FfmpegPacketSource {
    /// Open `path`, reading only the listed stream indices.
    pub fn open<P: AsRef<Path>>(path: P, streams: &[usize]) -> Result<Self> {
        let mut input = InputContext::open(path)?.into_inner();

        let count = input.streams().len();
        if let Some(&missing) = streams.iter().find(|&&s| s >= count) {
            return Err(ExtractError::TrackNotFound(missing));
        }

        let time_bases = input.streams().map(|s| s.time_base()).collect();

        for index in 0..count {
            if streams.contains(&index) {
                continue;
            }
            if let Some(mut stream) = input.stream_mut(index) {
                stream_discard_all(&mut stream);
            }
        }

        Ok(Self { input, time_bases })
    }

    /// The style-sheet header (CodecPrivate) of a stream, empty when absent.
    pub fn header(&self, stream: usize) -> Result<String> {
        self.input
            .stream(stream)
            .map(|s| stream_header_text(&s))
            .ok_or(ExtractError::TrackNotFound(stream))
    }
}

impl PacketSource for FfmpegPacketSource {
    fn next_packet(&mut self) -> Result<Option<SourcePacket>> {
        loop {
            let mut packet = ffmpeg::Packet::empty();
            match packet.read(&mut self.input) {
                Ok(()) => {}
                Err(ffmpeg::Error::Eof) => return Ok(None),
                Err(e) => return Err(ExtractError::PacketRead(e.to_string())),
            }

            let track = packet.stream();
            let Some(&time_base) = self.time_bases.get(track) else {
                tracing::debug!("Skipping packet for unknown stream {}", track);
                continue;
            };

            let start_ns = ts_to_nanos(packet.pts().or(packet.dts()).unwrap_or(0), time_base);
            let duration = packet.duration();
            let end_ns = if duration > 0 {
                start_ns.saturating_add(ts_to_nanos(duration, time_base))
            } else {
                0
            };

            return Ok(Some(SourcePacket {
                track,
                start_ns,
                end_ns,
                payload: packet.data().map(<[u8]>::to_vec).unwrap_or_default(),
            }));
        }
    }
}
