//! Test fixtures for integration tests
//!
//! Provides in-memory packet sources and canned subtitle tracks so the full
//! pipeline can run without media files or FFmpeg.

use std::collections::VecDeque;

use crate::error::{ExtractError, Result};
use crate::pipeline::{PacketSource, SourcePacket};

/// A [`PacketSource`] backed by a queue of packets.
pub struct MemorySource {
    packets: VecDeque<SourcePacket>,
    /// Fail with a read error after this many packets
    fail_after: Option<usize>,
    delivered: usize,
}

impl MemorySource {
    /// Build from `(track, start_ns, end_ns, payload)` tuples in demux order.
    pub fn new(packets: Vec<(usize, u64, u64, &str)>) -> Self {
        Self {
            packets: packets
                .into_iter()
                .map(|(track, start_ns, end_ns, payload)| SourcePacket {
                    track,
                    start_ns,
                    end_ns,
                    payload: payload.as_bytes().to_vec(),
                })
                .collect(),
            fail_after: None,
            delivered: 0,
        }
    }

    pub fn fail_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }
}

impl PacketSource for MemorySource {
    fn next_packet(&mut self) -> Result<Option<SourcePacket>> {
        if self.fail_after == Some(self.delivered) {
            return Err(ExtractError::PacketRead("simulated I/O error".to_string()));
        }
        self.delivered += 1;
        Ok(self.packets.pop_front())
    }
}

/// A canned subtitle track: codec, header and packets on stream `stream`.
#[derive(Debug, Clone)]
pub struct TestTrack {
    pub name: &'static str,
    pub stream: usize,
    pub codec_id: &'static str,
    pub header: &'static str,
    /// `(start_ns, end_ns, payload)`
    pub packets: Vec<(u64, u64, &'static str)>,
}

const SEC: u64 = 1_000_000_000;

pub const ASS_HEADER: &str = "[Script Info]\r\n\
Title: Fixture\r\n\
ScriptType: v4.00+\r\n\
PlayResX: 1280\r\n\
PlayResY: 720\r\n\
\r\n\
[V4+ Styles]\r\n\
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\r\n\
Style: Default,Arial,48,&H00FFFFFF,&H000000FF,&H00000000,&H80000000,0,0,0,0,100,100,0,0,1,2,1,2,10,10,10,1\r\n\
Style: Sign,Arial,40,&H00FFFFFF,&H000000FF,&H00000000,&H80000000,-1,0,0,0,100,100,0,0,1,2,0,8,10,10,10,1\r\n";

pub const SSA_HEADER: &str = "[Script Info]\n\
ScriptType: v4.00\n\
\n\
[V4 Styles]\n\
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, TertiaryColour, BackColour, Bold, Italic, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, AlphaLevel, Encoding\n\
Style: Default,Tahoma,24,16777215,65535,65535,-2147483640,-1,0,1,1,2,2,30,30,10,0,0\n\
Style: Top,Tahoma,24,16777215,65535,65535,-2147483640,-1,0,1,1,2,6,30,30,10,0,0\n\
\n\
[Events]\n\
Format: Marked, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n";

impl TestTrack {
    /// ASS track whose header has no `[Events]` section, with commas in text
    /// and out-of-order read orders at one timestamp.
    pub fn ass() -> Self {
        Self {
            name: "ass",
            stream: 2,
            codec_id: "S_TEXT/ASS",
            header: ASS_HEADER,
            packets: vec![
                (10 * SEC, 12 * SEC, "3,0,Default,,0,0,0,,Later line"),
                (SEC, 3 * SEC, "2,0,Default,,0,0,0,,Third"),
                (SEC, 3 * SEC, "0,0,Default,,0,0,0,,First"),
                (SEC, 3 * SEC, "1,1,Sign,Narrator,5,5,5,,Second, with comma"),
            ],
        }
    }

    /// Legacy SSA track with `Marked=` events format, missing durations.
    pub fn ssa() -> Self {
        Self {
            name: "ssa",
            stream: 3,
            codec_id: "S_TEXT/SSA",
            header: SSA_HEADER,
            packets: vec![
                (2 * SEC, 0, "0,0,Default,,0000,0000,0000,,Hello"),
                (4 * SEC, 0, "1,0,Top,,0000,0000,0000,,World"),
            ],
        }
    }

    /// SubRip track with HTML markup and multi-line cues.
    pub fn srt() -> Self {
        Self {
            name: "srt",
            stream: 4,
            codec_id: "S_TEXT/UTF8",
            header: "",
            packets: vec![
                (5 * SEC, 7 * SEC, "Second <b>cue</b>"),
                (SEC, 3 * SEC, "<i>First</i> line\r\nsecond line"),
                (8 * SEC, 0, r##"<font color="#FF8000">orange</font>"##),
            ],
        }
    }

    /// Image-based track; never extractable.
    pub fn pgs() -> Self {
        Self {
            name: "pgs",
            stream: 5,
            codec_id: "S_HDMV/PGS",
            header: "",
            packets: vec![(0, SEC, "\u{0}\u{1}")],
        }
    }

    /// A packet source carrying this track interleaved with unrelated streams.
    pub fn source(&self) -> MemorySource {
        let mut packets = vec![(0usize, 0u64, 40_000_000u64, "video")];
        for &(start, end, payload) in &self.packets {
            packets.push((self.stream, start, end, payload));
            packets.push((1, start, start + 20_000_000, "audio"));
        }
        MemorySource::new(packets)
    }
}
