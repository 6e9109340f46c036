//! Packet payload decoding into [`SubtitleEvent`]s

use crate::codec::CodecFamily;
use crate::error::{BlockError, ExtractError, Result};
use crate::types::{RawPacket, SubtitleEvent};

use super::tags::translate_tags;

/// Fields in a Matroska ASS/SSA block
const BLOCK_FIELDS: usize = 9;
/// Fields after ReadOrder and Layer (Style..Text)
const TRAILING_FIELDS: usize = 7;

/// Parse a structured block payload.
///
/// `Text` is the last field and may itself contain commas, so the tail is split
/// at most seven ways.
pub fn parse_block(
    payload: &str,
    start: u64,
    end: u64,
) -> std::result::Result<SubtitleEvent, BlockError> {
    if payload.is_empty() {
        return Err(BlockError::Empty);
    }

    let mut head = payload.splitn(3, ',');
    let (read_order, layer, rest) = match (head.next(), head.next(), head.next()) {
        (Some(r), Some(l), Some(rest)) => (r, l, rest),
        (_, l, _) => {
            return Err(BlockError::FieldCount {
                expected: BLOCK_FIELDS,
                got: if l.is_some() { 2 } else { 1 },
            })
        }
    };

    let fields: Vec<&str> = rest.splitn(TRAILING_FIELDS, ',').collect();
    if fields.len() < TRAILING_FIELDS {
        return Err(BlockError::FieldCount {
            expected: BLOCK_FIELDS,
            got: fields.len() + 2,
        });
    }

    let read_order = read_order
        .trim()
        .parse::<i64>()
        .map_err(|_| BlockError::InvalidReadOrder(read_order.to_string()))?;
    let layer = layer
        .trim()
        .parse::<i32>()
        .map_err(|_| BlockError::InvalidLayer(layer.to_string()))?;

    Ok(SubtitleEvent {
        start,
        end,
        layer,
        style: fields[0].to_string(),
        name: fields[1].to_string(),
        margin_l: fields[2].to_string(),
        margin_r: fields[3].to_string(),
        margin_v: fields[4].to_string(),
        effect: fields[5].to_string(),
        text: fields[6].to_string(),
        read_order,
    })
}

/// Decode a plain-text payload with the default style.
pub fn parse_plain_text(payload: &str, start: u64, end: u64) -> SubtitleEvent {
    SubtitleEvent::plain(start, end, translate_tags(payload))
}

/// Decode every packet of a track into events, in packet order.
///
/// The first malformed packet aborts the whole track.
pub fn decode_events(packets: &[RawPacket], codec_id: &str) -> Result<Vec<SubtitleEvent>> {
    let family = CodecFamily::from_codec_id(codec_id)
        .ok_or_else(|| ExtractError::UnsupportedCodec(codec_id.to_string()))?;

    packets
        .iter()
        .enumerate()
        .map(|(index, packet)| {
            let payload = String::from_utf8_lossy(&packet.payload);
            match family {
                CodecFamily::Structured => {
                    parse_block(&payload, packet.start_time, packet.end_time).map_err(|source| {
                        ExtractError::MalformedPacket {
                            index,
                            codec_id: codec_id.to_string(),
                            source,
                        }
                    })
                }
                CodecFamily::PlainText => Ok(parse_plain_text(
                    &payload,
                    packet.start_time,
                    packet.end_time,
                )),
            }
        })
        .collect()
}
