//! Subtitle event reconstruction
//!
//! Turns the raw packets of one track into canonical [`SubtitleEvent`]s:
//! - End-time gap-fill over the sorted packet list
//! - Structured (ASS/SSA block) and plain-text (SubRip) payload decoding
//! - SubRip markup to ASS override translation
//! - ASS timestamp formatting
//!
//! [`SubtitleEvent`]: crate::types::SubtitleEvent

pub mod decoder;
pub mod gapfill;
pub mod tags;
pub mod timestamp;

pub use decoder::{decode_events, parse_block, parse_plain_text};
pub use gapfill::{gap_fill, DEFAULT_TRAILING_DURATION_NS};
pub use tags::translate_tags;
pub use timestamp::format_timestamp;
