//! End-time repair for packets collected from a single track.

use crate::types::RawPacket;

/// Duration given to a trailing packet whose end time is unknown.
pub const DEFAULT_TRAILING_DURATION_NS: u64 = 5_000_000_000;

/// Sort packets by start time and fill in missing end times.
///
/// A packet with `end_time <= start_time` ends where the next later packet
/// starts. Packets sharing a start time all resolve to the first strictly later
/// start, so no packet ends up with a zero-length span. When nothing later
/// exists the packet is padded by [`DEFAULT_TRAILING_DURATION_NS`]. The pad
/// saturates at `u64::MAX`, so a packet starting at `u64::MAX` keeps
/// `end_time == start_time`. Demuxed timestamps come from `i64` and never
/// reach that range.
///
/// The sort is stable: packets with equal starts keep their demux order.
pub fn gap_fill(packets: &mut [RawPacket]) {
    packets.sort_by_key(|p| p.start_time);

    let mut next_later: Option<u64> = None;
    let mut filled = 0usize;

    for i in (0..packets.len()).rev() {
        if let Some(next) = packets.get(i + 1) {
            if next.start_time > packets[i].start_time {
                next_later = Some(next.start_time);
            }
        }

        let packet = &mut packets[i];
        if packet.end_time <= packet.start_time {
            packet.end_time = next_later.unwrap_or_else(|| {
                packet
                    .start_time
                    .saturating_add(DEFAULT_TRAILING_DURATION_NS)
            });
            filled += 1;
        }
    }

    if filled > 0 {
        tracing::debug!("Gap-filled end times for {} of {} packets", filled, packets.len());
    }
}
