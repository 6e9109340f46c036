//! ASS script output
//!
//! Header dialect conversion (SSA V4 to ASS V4+) and the script writers.

pub mod header;
pub mod writer;

pub use header::{convert_ssa_header, is_legacy_header, ssa_alignment_to_ass};
pub use writer::{default_header, write_passthrough, write_synthesized, EVENTS_FORMAT};
